use std::rc::Rc;

use yew::Reducible;

/// Bumped after a successful write. Pages list it in their fetch effect deps.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Revision(pub u32);

pub struct Bump;

impl Reducible for Revision {
    type Action = Bump;

    fn reduce(self: Rc<Self>, _: Bump) -> Rc<Self> {
        Rc::new(Revision(self.0.wrapping_add(1)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_back_to_back_bumps_both_count() {
        // two writes finishing before a re-render
        let revision = Rc::new(Revision::default()).reduce(Bump).reduce(Bump);
        assert_eq!(*revision, Revision(2));
    }

    #[test]
    fn test_wraps_instead_of_overflowing() {
        assert_eq!(*Rc::new(Revision(u32::MAX)).reduce(Bump), Revision(0));
    }
}
