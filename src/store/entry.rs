use crate::store::expiry::Expiry;

#[derive(Debug)]
pub(crate) struct Entry<V> {
    value: V,
    expiry: Option<Expiry>,
    generation: u64,
}

impl<V> Entry<V> {
    pub(crate) fn new(value: V, generation: u64, expiry: Option<Expiry>) -> Self {
        Self {
            value,
            expiry,
            generation,
        }
    }

    pub fn value(&self) -> &V {
        &self.value
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Cancels the pending expiry, if any, and returns the stored value.
    pub(crate) fn into_value(self) -> V {
        if let Some(expiry) = self.expiry {
            expiry.cancel();
        }
        self.value
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use std::sync::atomic::{AtomicBool, Ordering};
    use std::time::Duration;
    use tokio::runtime::Handle;

    #[test]
    fn it_keeps_value_and_generation() {
        // when
        let entry = Entry::new("value", 7, None);

        // then
        assert_eq!(*entry.value(), "value");
        assert_eq!(entry.generation(), 7);
    }

    #[tokio::test(start_paused = true)]
    async fn it_cancels_the_expiry_when_taking_the_value() {
        // given
        let fired = Arc::new(AtomicBool::new(false));
        let fired_in_task = Arc::clone(&fired);
        let expiry = Expiry::schedule(&Handle::current(), Duration::from_millis(10), move || {
            fired_in_task.store(true, Ordering::Release);
        });
        let entry = Entry::new(String::from("value"), 1, Some(expiry));

        // when
        let value = entry.into_value();
        tokio::time::sleep(Duration::from_millis(20)).await;

        // then
        assert_eq!(value, "value");
        assert!(!fired.load(Ordering::Acquire));
    }
}
