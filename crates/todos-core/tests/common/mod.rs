use todos_core::auth::{hash_password_with_cost, UserDirectory};
use todos_core::ops::SessionData;
use todos_core_types::Sensitive;

/// Fresh session data plus a directory holding `alice`/`secret`
#[allow(dead_code)]
pub fn new_session() -> (SessionData, UserDirectory) {
    let mut users = UserDirectory::new();
    let hash = hash_password_with_cost(&Sensitive::from("secret"), 4).unwrap();
    users.insert("alice", hash);
    (SessionData::new(), users)
}
