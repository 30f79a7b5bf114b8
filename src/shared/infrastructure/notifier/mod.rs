use crate::shared::core::toast::Toast;

pub trait Notifier: Send + Sync {
    fn notify(&self, toast: Toast);
}

pub mod in_memory;
