use crate::signal::{Signal, Subscription};

/// The payload passed to birth and death handlers.
///
/// Identifies the originating cell; the transition kind is implied by the
/// channel that fired.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct CellEvent {
    pub row: usize,
    pub col: usize,
}

/// A single automaton unit owned by a [`Grid`](crate::Grid).
///
/// The cell carries two states: `is_alive` is the current one, `was_alive`
/// is the snapshot as of the end of the previous completed generation.
/// Neighbor counting reads only the snapshot, which is what makes a
/// generation update simultaneous regardless of evaluation order.
pub struct Cell {
    row: usize,
    col: usize,
    is_alive: bool,
    was_alive: bool,
    neighbors: [usize; 8],
    born_signal: Signal,
    died_signal: Signal,
}

impl Cell {
    pub(crate) fn new(row: usize, col: usize, neighbors: [usize; 8]) -> Cell {
        Cell {
            row,
            col,
            is_alive: false,
            was_alive: false,
            neighbors,
            born_signal: Signal::new(),
            died_signal: Signal::new(),
        }
    }

    pub fn row(&self) -> usize {
        self.row
    }

    pub fn col(&self) -> usize {
        self.col
    }

    pub fn is_alive(&self) -> bool {
        self.is_alive
    }

    /// The cell's state as of the end of the previous completed generation.
    pub fn was_alive(&self) -> bool {
        self.was_alive
    }

    /// Indices of the 8 toroidal Moore neighbors in the grid's cell store.
    /// On degenerate grid dimensions several slots may point at the same
    /// cell; counting treats every slot independently.
    pub(crate) fn neighbors(&self) -> &[usize; 8] {
        &self.neighbors
    }

    /// Toggles the cell between alive and dead as a direct user edit.
    ///
    /// Dispatches to the forced transitions, so the matching signal fires.
    pub fn switch(&mut self) {
        if self.is_alive {
            self.force_die();
        } else {
            self.force_born();
        }
    }

    /// Forces the cell dead, updating both states, and fires the death
    /// signal even when the cell was already dead.
    pub fn force_die(&mut self) {
        self.is_alive = false;
        self.was_alive = false;
        let event = self.event();
        self.died_signal.fire(event);
    }

    /// Forces the cell alive, updating both states, and fires the birth
    /// signal even when the cell was already alive.
    pub fn force_born(&mut self) {
        self.is_alive = true;
        self.was_alive = true;
        let event = self.event();
        self.born_signal.fire(event);
    }

    /// Subscribes a handler to birth notifications.
    pub fn on_born(&mut self, handler: impl FnMut(CellEvent) + 'static) -> Subscription {
        self.born_signal.subscribe(handler)
    }

    /// Subscribes a handler to death notifications.
    pub fn on_died(&mut self, handler: impl FnMut(CellEvent) + 'static) -> Subscription {
        self.died_signal.subscribe(handler)
    }

    pub fn unsubscribe_born(&mut self, subscription: Subscription) -> bool {
        self.born_signal.unsubscribe(subscription)
    }

    pub fn unsubscribe_died(&mut self, subscription: Subscription) -> bool {
        self.died_signal.unsubscribe(subscription)
    }

    /// Evaluate phase of a generation update.
    ///
    /// Applies the life rule given the number of neighbor slots that were
    /// alive in the previous generation: a live cell with a count outside
    /// {2, 3} dies; a count of exactly 3 makes the cell alive and fires the
    /// birth signal even when it already was alive; anything else is no
    /// transition and no signal.
    pub(crate) fn apply_rule(&mut self, alive_neighbors: usize) {
        let event = self.event();

        if self.was_alive && !(2..=3).contains(&alive_neighbors) {
            self.is_alive = false;
            self.died_signal.fire(event);
        } else if alive_neighbors == 3 {
            self.is_alive = true;
            self.born_signal.fire(event);
        }
    }

    /// Commit phase of a generation update: promotes the current state to be
    /// the next generation's snapshot.
    pub(crate) fn commit(&mut self) {
        self.was_alive = self.is_alive;
    }

    /// Replaces both states without firing any signal. Bulk loads use this.
    pub(crate) fn set_state(&mut self, alive: bool) {
        self.is_alive = alive;
        self.was_alive = alive;
    }

    fn event(&self) -> CellEvent {
        CellEvent {
            row: self.row,
            col: self.col,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    fn dead_cell() -> Cell {
        Cell::new(1, 2, [0; 8])
    }

    fn live_cell() -> Cell {
        let mut cell = dead_cell();
        cell.set_state(true);
        cell
    }

    fn count_born(cell: &mut Cell) -> Rc<RefCell<usize>> {
        let counter = Rc::new(RefCell::new(0));
        let handler_counter = Rc::clone(&counter);
        cell.on_born(move |_| *handler_counter.borrow_mut() += 1);
        counter
    }

    fn count_died(cell: &mut Cell) -> Rc<RefCell<usize>> {
        let counter = Rc::new(RefCell::new(0));
        let handler_counter = Rc::clone(&counter);
        cell.on_died(move |_| *handler_counter.borrow_mut() += 1);
        counter
    }

    #[test]
    fn when_switching_a_dead_cell_it_becomes_alive_and_fires_born() {
        let mut cell = dead_cell();
        let born = count_born(&mut cell);

        cell.switch();

        assert!(cell.is_alive());
        assert!(cell.was_alive());
        assert_eq!(*born.borrow(), 1);
    }

    #[test]
    fn when_switching_a_live_cell_it_becomes_dead_and_fires_died() {
        let mut cell = live_cell();
        let died = count_died(&mut cell);

        cell.switch();

        assert!(!cell.is_alive());
        assert!(!cell.was_alive());
        assert_eq!(*died.borrow(), 1);
    }

    #[test]
    fn when_forcing_a_live_cell_born_the_signal_still_fires() {
        let mut cell = live_cell();
        let born = count_born(&mut cell);

        cell.force_born();

        assert!(cell.is_alive());
        assert_eq!(*born.borrow(), 1);
    }

    #[test]
    fn when_forcing_a_dead_cell_to_die_the_signal_still_fires() {
        let mut cell = dead_cell();
        let died = count_died(&mut cell);

        cell.force_die();

        assert!(!cell.is_alive());
        assert_eq!(*died.borrow(), 1);
    }

    #[test]
    fn when_a_live_cell_has_too_few_neighbors_it_dies() {
        let mut cell = live_cell();
        let died = count_died(&mut cell);

        cell.apply_rule(1);

        assert!(!cell.is_alive());
        // The snapshot only catches up at commit time
        assert!(cell.was_alive());
        assert_eq!(*died.borrow(), 1);
    }

    #[test]
    fn when_a_live_cell_has_too_many_neighbors_it_dies() {
        let mut cell = live_cell();
        let died = count_died(&mut cell);

        cell.apply_rule(4);

        assert!(!cell.is_alive());
        assert_eq!(*died.borrow(), 1);
    }

    #[test]
    fn when_a_live_cell_has_two_neighbors_it_survives_without_any_signal() {
        let mut cell = live_cell();
        let born = count_born(&mut cell);
        let died = count_died(&mut cell);

        cell.apply_rule(2);

        assert!(cell.is_alive());
        assert_eq!(*born.borrow(), 0);
        assert_eq!(*died.borrow(), 0);
    }

    #[test]
    fn when_a_live_cell_has_three_neighbors_it_survives_and_fires_born() {
        let mut cell = live_cell();
        let born = count_born(&mut cell);

        cell.apply_rule(3);

        assert!(cell.is_alive());
        assert_eq!(*born.borrow(), 1);
    }

    #[test]
    fn when_a_dead_cell_has_exactly_three_neighbors_it_is_born() {
        let mut cell = dead_cell();
        let born = count_born(&mut cell);

        cell.apply_rule(3);

        assert!(cell.is_alive());
        assert!(!cell.was_alive());
        assert_eq!(*born.borrow(), 1);
    }

    #[test]
    fn when_a_dead_cell_has_any_other_neighbor_count_nothing_happens() {
        for count in [0, 1, 2, 4, 5, 6, 7, 8] {
            let mut cell = dead_cell();
            let born = count_born(&mut cell);
            let died = count_died(&mut cell);

            cell.apply_rule(count);

            assert!(!cell.is_alive());
            assert_eq!(*born.borrow(), 0);
            assert_eq!(*died.borrow(), 0);
        }
    }

    #[test]
    fn when_committing_the_snapshot_catches_up_with_the_current_state() {
        let mut cell = live_cell();
        cell.apply_rule(0);
        assert!(cell.was_alive());

        cell.commit();

        assert!(!cell.was_alive());
        assert!(!cell.is_alive());
    }

    #[test]
    fn when_replacing_the_state_no_signal_fires() {
        let mut cell = dead_cell();
        let born = count_born(&mut cell);
        let died = count_died(&mut cell);

        cell.set_state(true);
        cell.set_state(false);

        assert_eq!(*born.borrow(), 0);
        assert_eq!(*died.borrow(), 0);
    }

    #[test]
    fn when_unsubscribing_a_cell_handler_it_no_longer_fires() {
        let mut cell = dead_cell();
        let counter = Rc::new(RefCell::new(0));
        let handler_counter = Rc::clone(&counter);
        let subscription = cell.on_born(move |_| *handler_counter.borrow_mut() += 1);

        cell.force_born();
        assert!(cell.unsubscribe_born(subscription));
        cell.force_born();

        assert_eq!(*counter.borrow(), 1);
    }

    #[test]
    fn when_an_event_fires_it_carries_the_cell_coordinates() {
        let mut cell = dead_cell();
        let received = Rc::new(RefCell::new(None));
        let handler_received = Rc::clone(&received);
        cell.on_born(move |event| *handler_received.borrow_mut() = Some(event));

        cell.force_born();

        assert_eq!(*received.borrow(), Some(CellEvent { row: 1, col: 2 }));
    }
}
