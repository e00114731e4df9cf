use std::sync::{Arc, Mutex};

use tokio::sync::Notify;

/// Single-slot mailbox with latest-wins overwrite semantics.
///
/// Backs subscriptions where only the newest value matters (the captured
/// manifest URL is exactly this: no history, last write wins).
pub struct Latest1Queue<T> {
    slot: Mutex<Option<T>>,
    notify_any: Arc<Notify>,
}

impl<T> Latest1Queue<T> {
    pub fn new(notify_any: Arc<Notify>) -> Self {
        Self {
            slot: Mutex::new(None),
            notify_any,
        }
    }

    pub fn set(&self, value: T) {
        *self.slot.lock().expect("Latest1Queue poisoned") = Some(value);
        self.notify_any.notify_one();
    }

    pub fn try_recv(&self) -> Option<T> {
        self.slot.lock().expect("Latest1Queue poisoned").take()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn burst_collapses_to_newest_value() {
        let q = Latest1Queue::new(Arc::new(Notify::new()));
        q.set(1);
        q.set(2);
        q.set(3);
        assert_eq!(q.try_recv(), Some(3));
        assert_eq!(q.try_recv(), None);
    }

    #[tokio::test]
    async fn set_wakes_a_waiter() {
        let notify = Arc::new(Notify::new());
        let q = Arc::new(Latest1Queue::new(Arc::clone(&notify)));

        let waiter = {
            let notify = Arc::clone(&notify);
            let q = Arc::clone(&q);
            tokio::spawn(async move {
                notify.notified().await;
                q.try_recv()
            })
        };

        q.set("manifest");
        assert_eq!(waiter.await.unwrap(), Some("manifest"));
    }
}
