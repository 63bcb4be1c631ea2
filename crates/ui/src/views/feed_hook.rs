use std::cell::RefCell;
use std::rc::Rc;

use dioxus::prelude::*;
use services::{Feed, Subscription};
use tokio::sync::mpsc;

/// Subscribes the calling component to `feed` for as long as it is mounted.
///
/// Feed callbacks may fire from any thread, so values are forwarded through a
/// channel and handed to `on_update` on the component's own task. The
/// subscription is released explicitly when the component is dropped.
pub fn use_feed<T>(feed: Feed<T>, mut on_update: impl FnMut(T) + 'static)
where
    T: Clone + Send + 'static,
{
    let subscription = use_hook(move || {
        let (tx, mut rx) = mpsc::unbounded_channel::<T>();
        spawn(async move {
            while let Some(value) = rx.recv().await {
                on_update(value);
            }
        });
        let subscription = feed.subscribe(move |value: &T| {
            // receiver is gone once the component unmounts
            let _ = tx.send(value.clone());
        });
        Rc::new(RefCell::new(Some(subscription)))
    });

    use_drop(move || {
        let detached: Option<Subscription> = subscription.borrow_mut().take();
        if let Some(subscription) = detached {
            subscription.unsubscribe();
        }
    });
}
