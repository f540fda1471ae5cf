use std::time::Duration;

/// How long an entry lives after it was inserted.
///
/// [`Ttl::Never`] keeps the entry until it is removed, replaced or the store is cleared. A zero
/// duration means the same thing, so `Ttl::from(Duration::ZERO)` is [`Ttl::Never`].
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Default)]
pub enum Ttl {
    #[default]
    Never,
    After(Duration),
}

impl Ttl {
    pub fn from_secs(secs: u64) -> Ttl {
        Ttl::from(Duration::from_secs(secs))
    }

    pub fn from_millis(millis: u64) -> Ttl {
        Ttl::from(Duration::from_millis(millis))
    }

    /// Returns the delay after which the entry expires, or [`None`] if it never does.
    pub fn delay(self) -> Option<Duration> {
        match self {
            Ttl::After(duration) if !duration.is_zero() => Some(duration),
            _ => None,
        }
    }

    pub fn is_never(self) -> bool {
        self.delay().is_none()
    }
}

impl From<Duration> for Ttl {
    fn from(duration: Duration) -> Self {
        if duration.is_zero() {
            Ttl::Never
        } else {
            Ttl::After(duration)
        }
    }
}

impl From<Option<Duration>> for Ttl {
    fn from(duration: Option<Duration>) -> Self {
        duration.map_or(Ttl::Never, Ttl::from)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn it_treats_zero_duration_as_never() {
        // when
        let ttl = Ttl::from(Duration::ZERO);

        // then
        assert_eq!(ttl, Ttl::Never);
        assert!(ttl.is_never());
    }

    #[test]
    fn it_has_no_delay_for_explicit_zero() {
        // given
        let ttl = Ttl::After(Duration::ZERO);

        // then
        assert_eq!(ttl.delay(), None);
        assert!(ttl.is_never());
    }

    #[test]
    fn it_converts_finite_durations() {
        // when
        let ttl: Ttl = Duration::from_millis(50).into();

        // then
        assert_eq!(ttl, Ttl::After(Duration::from_millis(50)));
        assert_eq!(ttl.delay(), Some(Duration::from_millis(50)));
        assert_eq!(Ttl::from_millis(50), ttl);
        assert_eq!(Ttl::from_secs(2).delay(), Some(Duration::from_secs(2)));
    }

    #[test]
    fn it_converts_options() {
        assert_eq!(Ttl::from(None), Ttl::Never);
        assert_eq!(
            Ttl::from(Some(Duration::from_secs(1))),
            Ttl::After(Duration::from_secs(1))
        );
    }

    #[test]
    fn it_defaults_to_never() {
        assert_eq!(Ttl::default(), Ttl::Never);
    }
}
