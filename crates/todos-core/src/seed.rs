//! Sample data every owner starts with in the session-memory backend

use crate::model::{Todo, TodoList};

const SEED: &[(&str, &[(&str, bool)])] = &[
    (
        "Work Todos",
        &[
            ("Get coffee", true),
            ("Chat with co-workers", true),
            ("Duck out of meeting", false),
        ],
    ),
    (
        "Home Todos",
        &[
            ("Feed the cats", true),
            ("Go to bed", false),
            ("Buy milk", true),
            ("Study for the exam", true),
        ],
    ),
    ("Additional Todos", &[]),
    ("social todos", &[("Go to Libby's birthday party", true)]),
];

/// Build the seed lists, drawing ids from `next_id`
///
/// Lists and todos share one id sequence, so every id handed out is unique
/// within the owner's data.
pub fn seed_lists(next_id: &mut i64) -> Vec<TodoList> {
    let mut take_id = || {
        *next_id += 1;
        *next_id
    };

    SEED.iter()
        .map(|(title, todos)| {
            let mut list = TodoList::new(take_id(), *title);
            for (todo_title, done) in todos.iter() {
                let mut todo = Todo::new(take_id(), *todo_title);
                todo.done = *done;
                list.todos.push(todo);
            }
            list
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_seed_ids_are_unique_and_sequential() {
        let mut next_id = 0;
        let lists = seed_lists(&mut next_id);

        let mut ids = HashSet::new();
        for list in &lists {
            assert!(ids.insert(list.id));
            for todo in &list.todos {
                assert!(ids.insert(todo.id));
            }
        }
        assert_eq!(ids.len() as i64, next_id);
    }

    #[test]
    fn test_seed_is_deterministic() {
        let mut a = 0;
        let mut b = 0;
        assert_eq!(seed_lists(&mut a), seed_lists(&mut b));
    }

    #[test]
    fn test_seed_titles_are_unique() {
        let mut next_id = 0;
        let lists = seed_lists(&mut next_id);
        let titles: HashSet<&str> = lists.iter().map(|l| l.title.as_str()).collect();
        assert_eq!(titles.len(), lists.len());
    }
}
