use crate::modules::auth::core::user::{Role, User};

pub const LOGIN_ROUTE: &str = "/";
pub const EMPLOYEE_ROUTE: &str = "/employee";
pub const ADMIN_ROUTE: &str = "/admin";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GuardDecision {
    Allow(User),
    Redirect { to: &'static str },
}

/// One allow/deny decision per request. Anonymous and role-mismatched
/// sessions go back to the login route.
pub fn decide_guard(required: Role, session: Option<&User>) -> GuardDecision {
    match session {
        Some(user) if user.role == required => GuardDecision::Allow(user.clone()),
        _ => GuardDecision::Redirect { to: LOGIN_ROUTE },
    }
}

/// Where a freshly signed-in user lands.
pub fn landing_route(user: &User) -> &'static str {
    match user.role {
        Role::Admin => ADMIN_ROUTE,
        Role::Employee => EMPLOYEE_ROUTE,
    }
}

#[cfg(test)]
mod guard_route_decide_tests {
    use super::*;
    use crate::tests::fixtures::users::{admin, sarah};
    use rstest::rstest;

    #[rstest]
    fn it_should_allow_a_matching_role() {
        assert_eq!(
            decide_guard(Role::Employee, Some(&sarah())),
            GuardDecision::Allow(sarah())
        );
        assert_eq!(
            decide_guard(Role::Admin, Some(&admin())),
            GuardDecision::Allow(admin())
        );
    }

    #[rstest]
    #[case(Role::Admin, Some(sarah()))]
    #[case(Role::Employee, Some(admin()))]
    #[case(Role::Employee, None)]
    #[case(Role::Admin, None)]
    fn it_should_redirect_to_login(#[case] required: Role, #[case] session: Option<User>) {
        assert_eq!(
            decide_guard(required, session.as_ref()),
            GuardDecision::Redirect { to: LOGIN_ROUTE }
        );
    }

    #[rstest]
    fn it_should_land_each_role_on_its_dashboard() {
        assert_eq!(landing_route(&admin()), "/admin");
        assert_eq!(landing_route(&sarah()), "/employee");
    }
}
