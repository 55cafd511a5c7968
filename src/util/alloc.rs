use std::cell::RefCell;
use std::ops::Deref;
use std::rc::Rc;

/// A value which counts how many times it, or any of its clones, has been dropped.
#[derive(Debug, Clone)]
#[allow(unused)]
pub struct CountedDrop(pub Rc<RefCell<usize>>);

impl CountedDrop {
    #[allow(unused)]
    pub fn new() -> CountedDrop {
        CountedDrop(Rc::new(RefCell::new(0)))
    }

    /// Returns the number of drops so far, without resetting the counter.
    #[allow(unused)]
    pub fn dropped(&self) -> usize {
        *self.0.borrow()
    }
}

impl Deref for CountedDrop {
    type Target = Rc<RefCell<usize>>;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl Drop for CountedDrop {
    fn drop(&mut self) {
        self.0.replace_with(|v| *v + 1);
    }
}
