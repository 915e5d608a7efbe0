/// Releases a timer or event listener when dropped.
#[must_use = "dropping a Subscription releases it immediately"]
pub struct Subscription {
    release: Option<Box<dyn FnOnce()>>,
}

impl Subscription {
    pub fn new(release: impl FnOnce() + 'static) -> Self {
        Self {
            release: Some(Box::new(release)),
        }
    }

    /// Releases now. Safe to call more than once.
    pub fn release(&mut self) {
        if let Some(release) = self.release.take() {
            release();
        }
    }

    pub fn is_released(&self) -> bool {
        self.release.is_none()
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        self.release();
    }
}

impl std::fmt::Debug for Subscription {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Subscription")
            .field("released", &self.is_released())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;
    use std::rc::Rc;

    #[test]
    fn releases_once_on_drop() {
        let count = Rc::new(Cell::new(0));
        let counter = count.clone();
        let subscription = Subscription::new(move || counter.set(counter.get() + 1));
        drop(subscription);
        assert_eq!(count.get(), 1);
    }

    #[test]
    fn explicit_release_is_not_repeated_by_drop() {
        let count = Rc::new(Cell::new(0));
        let counter = count.clone();
        let mut subscription = Subscription::new(move || counter.set(counter.get() + 1));
        subscription.release();
        subscription.release();
        assert!(subscription.is_released());
        drop(subscription);
        assert_eq!(count.get(), 1);
    }
}
