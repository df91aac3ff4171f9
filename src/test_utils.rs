use core::cell::Cell;

#[derive(Debug)]
pub(crate) struct DropCounter {
    count: Cell<usize>,
}

impl DropCounter {
    pub(crate) fn new() -> Self {
        DropCounter {
            count: Cell::new(0),
        }
    }

    pub(crate) fn new_droppable<T>(&self, value: T) -> Droppable<'_, T> {
        Droppable {
            value,
            counter: self,
        }
    }

    pub(crate) fn dropped(&self) -> usize {
        self.count.get()
    }
}

#[derive(Clone, Debug)]
pub(crate) struct Droppable<'a, T> {
    pub value: T,
    counter: &'a DropCounter,
}

impl<T: PartialEq> PartialEq for Droppable<'_, T> {
    fn eq(&self, other: &Self) -> bool {
        self.value == other.value
    }
}

impl<T> Drop for Droppable<'_, T> {
    fn drop(&mut self) {
        let count = self.counter.count.get();
        self.counter.count.set(count + 1);
    }
}
