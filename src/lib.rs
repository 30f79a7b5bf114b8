pub mod shared {
    pub mod core {
        pub mod primitives;
        pub mod toast;
    }
    pub mod infrastructure {
        pub mod change_feed;
        pub mod durable_storage;
        pub mod geolocation;
        pub mod notifier;
    }
}

pub mod modules {
    pub mod auth {
        pub mod core {
            pub mod session;
            pub mod user;
        }
        pub mod use_cases {
            pub mod login {
                pub mod command;
                pub mod handler;
                pub mod inbound {
                    pub mod http;
                }
            }
            pub mod logout {
                pub mod handler;
                pub mod inbound {
                    pub mod http;
                }
            }
            pub mod signup {
                pub mod command;
                pub mod handler;
                pub mod inbound {
                    pub mod http;
                }
            }
            pub mod guard_route {
                pub mod decide;
                pub mod inbound {
                    pub mod http;
                }
            }
        }
        pub mod adapters {
            pub mod outbound {
                pub mod user_directory;
                pub mod user_directory_in_memory;
            }
        }
    }
    pub mod attendance {
        pub mod core {
            pub mod day;
            pub mod decision;
            pub mod policy;
            pub mod record;
            pub mod summary;
        }
        pub mod use_cases {
            pub mod errors;
            pub mod clock_in {
                pub mod command;
                pub mod decide;
                pub mod handler;
                pub mod inbound {
                    pub mod http;
                }
            }
            pub mod clock_out {
                pub mod command;
                pub mod decide;
                pub mod handler;
                pub mod inbound {
                    pub mod http;
                }
            }
            pub mod fetch_today {
                pub mod handler;
            }
            pub mod fetch_history {
                pub mod handler;
                pub mod inbound {
                    pub mod http;
                }
            }
        }
        pub mod sync {
            pub mod attendance_sync;
            pub mod refresh_loop;
        }
        pub mod adapters {
            pub mod inbound {
                pub mod graphql;
            }
            pub mod outbound {
                pub mod attendance_store;
                pub mod attendance_store_in_memory;
            }
        }
    }
    pub mod leave {
        pub mod core {
            pub mod decision;
            pub mod leave_request;
        }
        pub mod use_cases {
            pub mod submit_leave {
                pub mod command;
                pub mod handler;
                pub mod inbound {
                    pub mod http;
                }
            }
            pub mod review_leave {
                pub mod decide;
                pub mod handler;
                pub mod inbound {
                    pub mod http;
                }
            }
            pub mod list_leave {
                pub mod inbound {
                    pub mod http;
                }
            }
        }
        pub mod adapters {
            pub mod outbound {
                pub mod leave_store;
                pub mod leave_store_in_memory;
            }
        }
    }
    pub mod admin {
        pub mod use_cases {
            pub mod dashboard_stats {
                pub mod handler;
                pub mod inbound {
                    pub mod http;
                }
            }
            pub mod recent_activity {
                pub mod handler;
                pub mod inbound {
                    pub mod http;
                }
            }
        }
    }
}

pub mod shell;
