use crate::modules::auth::core::user::User;

const DEMO_USERS: &str = include_str!("../../modules/auth/adapters/outbound/demo_users.json");

fn demo_user(id: &str) -> User {
    let users: Vec<User> = serde_json::from_str(DEMO_USERS).unwrap();
    users.into_iter().find(|u| u.id == id).unwrap()
}

pub fn admin() -> User {
    demo_user("1")
}

pub fn sarah() -> User {
    demo_user("2")
}

pub fn john() -> User {
    demo_user("3")
}
