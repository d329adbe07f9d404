use crate::compare::Order;
use crate::error::{Error, Result};
#[cfg(feature = "presets")]
use crate::presets::Preset;
use crate::store::cursor::Cursor;
use crate::store::{Element, SequenceStore};
use log::{debug, trace};
use rand::Rng;

/// A [`SequenceStore`] together with one persistent cursor position.
///
/// The `Model` is the single stateful object a presentation layer talks to.
/// Every operation leaves the cursor inside `0..=len`:
///
/// | Operation | Cursor afterwards |
/// |---|---|
/// | push, pop, insert, erase, clear, resize, replace-all, sort, unique | position 0 |
/// | find, min, max | found position, or the sentinel |
/// | lower/upper bound | computed bound; untouched if the store is not sorted |
/// | reverse, shuffle, edit | untouched |
///
/// Operations that cannot apply report it through their return value and
/// change nothing.
///
/// # Examples
///
/// ```
/// use deque_emulator::Model;
///
/// let mut model = Model::new();
/// model.push_back("a");
/// model.push_back("b");
/// model.push_front("z");
/// assert_eq!(model.snapshot(), ["z", "a", "b"]);
/// assert_eq!(model.position(), 0);
///
/// model.move_to(2).unwrap();
/// assert_eq!(model.erase().as_deref(), Some("b"));
/// assert_eq!(model.snapshot(), ["z", "a"]);
/// assert_eq!(model.position(), 0);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Model {
    store: SequenceStore,
    position: usize,
}

/// Which controls make sense for the current state, for a presentation layer
/// that enables and disables buttons.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Controls {
    /// The store is not empty.
    pub pop: bool,
    /// The cursor is not at position 0.
    pub decrement: bool,
    /// The cursor is not at the sentinel.
    pub increment: bool,
    /// The cursor is not at the sentinel.
    pub edit: bool,
    /// The cursor is not at the sentinel.
    pub erase: bool,
}

impl Model {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a model holding `values`, with the cursor at position 0.
    pub fn with_items<I>(values: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<Element>,
    {
        let mut model = Self::new();
        model.replace_all(values);
        model
    }

    fn reset_cursor(&mut self, op: &str) {
        self.position = 0;
        debug!("{}: len = {}, cursor reset", op, self.store.len());
    }

    fn place_cursor(&mut self, op: &str, position: usize) {
        debug_assert!(position <= self.store.len());
        self.position = position;
        debug!("{}: cursor at {} of {}", op, position, self.store.len());
    }

    /// Found positions are `Some`, the sentinel is `None`.
    fn found(&self) -> Option<usize> {
        Some(self.position).filter(|&p| p < self.store.len())
    }
}

// Reading
impl Model {
    #[inline]
    pub fn len(&self) -> usize {
        self.store.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.store.is_empty()
    }

    /// Read-only access to the store.
    #[inline]
    pub fn store(&self) -> &SequenceStore {
        &self.store
    }

    /// Returns a copy of the content, in order, for rendering.
    pub fn snapshot(&self) -> Vec<Element> {
        self.store.snapshot()
    }

    /// Returns the cursor position, in `0..=len`.
    #[inline]
    pub fn position(&self) -> usize {
        self.position
    }

    /// Returns a read-only view of the cursor.
    pub fn cursor(&self) -> Cursor<'_> {
        self.store.cursor(self.position)
    }

    /// Dereference the cursor, where the sentinel reads as an empty string.
    pub fn current(&self) -> &str {
        self.store.get(self.position).map_or("", String::as_str)
    }

    pub fn is_at_start(&self) -> bool {
        self.position == 0
    }

    pub fn is_at_end(&self) -> bool {
        self.position == self.store.len()
    }

    pub fn controls(&self) -> Controls {
        let at_end = self.is_at_end();
        Controls {
            pop: !self.is_empty(),
            decrement: !self.is_at_start(),
            increment: !at_end,
            edit: !at_end,
            erase: !at_end,
        }
    }

    /// The rows of a list display: `"{index}: {value}"` per element, then a
    /// final `"end"` row for the sentinel. Row [`position`](Self::position) is
    /// the cursor's.
    ///
    /// # Examples
    ///
    /// ```
    /// use deque_emulator::Model;
    ///
    /// let model = Model::with_items(["tea", "cake"]);
    /// let rows: Vec<String> = model.rows().collect();
    /// assert_eq!(rows, ["0: tea", "1: cake", "end"]);
    /// ```
    pub fn rows(&self) -> impl Iterator<Item = String> + '_ {
        self.store
            .iter()
            .enumerate()
            .map(|(i, item)| format!("{}: {}", i, item))
            .chain(std::iter::once("end".to_owned()))
    }
}

// Cursor movement
impl Model {
    /// Move the cursor to `position`, or return an error and stay put if
    /// `position > len`.
    pub fn move_to(&mut self, position: usize) -> Result<()> {
        let mut cursor = self.cursor();
        cursor.seek_to(position)?;
        self.position = cursor.index();
        trace!("move_to: cursor at {}", self.position);
        Ok(())
    }

    pub fn move_to_start(&mut self) {
        self.position = 0;
        trace!("move_to_start");
    }

    pub fn move_to_end(&mut self) {
        self.position = self.store.len();
        trace!("move_to_end: cursor at {}", self.position);
    }

    /// Move the cursor one step forward, or return an error if it is at the
    /// sentinel.
    pub fn increment(&mut self) -> Result<()> {
        let mut cursor = self.cursor();
        cursor.move_next()?;
        self.position = cursor.index();
        trace!("increment: cursor at {}", self.position);
        Ok(())
    }

    /// Move the cursor one step back, or return an error if it is at
    /// position 0.
    pub fn decrement(&mut self) -> Result<()> {
        let mut cursor = self.cursor();
        cursor.move_prev()?;
        self.position = cursor.index();
        trace!("decrement: cursor at {}", self.position);
        Ok(())
    }
}

// Structural changes
impl Model {
    pub fn push_back(&mut self, value: impl Into<Element>) {
        self.store.push_back(value.into());
        self.reset_cursor("push_back");
    }

    pub fn push_front(&mut self, value: impl Into<Element>) {
        self.store.push_front(value.into());
        self.reset_cursor("push_front");
    }

    /// Removes and returns the last element. On an empty store nothing
    /// happens, not even a cursor reset.
    pub fn pop_back(&mut self) -> Option<Element> {
        let popped = self.store.pop_back()?;
        self.reset_cursor("pop_back");
        Some(popped)
    }

    /// Removes and returns the first element. On an empty store nothing
    /// happens, not even a cursor reset.
    pub fn pop_front(&mut self) -> Option<Element> {
        let popped = self.store.pop_front()?;
        self.reset_cursor("pop_front");
        Some(popped)
    }

    /// Inserts `value` immediately before the cursor (appends at the
    /// sentinel), then resets the cursor.
    pub fn insert(&mut self, value: impl Into<Element>) {
        self.store.cursor_mut(self.position).insert(value.into());
        self.reset_cursor("insert");
    }

    /// Removes and returns the element at the cursor, then resets the cursor.
    /// At the sentinel nothing happens and `None` is returned.
    pub fn erase(&mut self) -> Option<Element> {
        let Some(erased) = self.store.cursor_mut(self.position).remove() else {
            debug!("erase: declined, cursor past the end");
            return None;
        };
        self.reset_cursor("erase");
        Some(erased)
    }

    /// Replaces the element at the cursor and returns the old one. The cursor
    /// does not move. At the sentinel this returns [`Error::AtSentinel`].
    pub fn edit(&mut self, value: impl Into<Element>) -> Result<Element> {
        let old = self
            .store
            .cursor_mut(self.position)
            .replace(value.into())
            .map_err(|err| {
                debug!("edit: declined, {}", err);
                err
            })?;
        debug!("edit: replaced element {}", self.position);
        Ok(old)
    }

    pub fn clear(&mut self) {
        self.store.clear();
        self.reset_cursor("clear");
    }

    pub fn resize(&mut self, new_len: usize) {
        self.store.resize(new_len);
        self.reset_cursor("resize");
    }

    /// Replaces the whole content with `values`.
    pub fn replace_all<I>(&mut self, values: I)
    where
        I: IntoIterator,
        I::Item: Into<Element>,
    {
        self.store.replace_all(values);
        self.reset_cursor("replace_all");
    }

    /// Loads a demo dataset, replacing the whole content.
    #[cfg(feature = "presets")]
    pub fn load_preset(&mut self, preset: Preset) {
        debug!("loading preset {}", preset);
        self.replace_all(preset.items().iter().copied());
    }

    /// Loads a demo dataset by name. An unknown name changes nothing.
    ///
    /// # Examples
    ///
    /// ```
    /// use deque_emulator::Model;
    ///
    /// let mut model = Model::new();
    /// assert!(model.load_named("cakes").is_ok());
    /// assert_eq!(model.len(), 10);
    /// assert!(model.load_named("pies").is_err());
    /// assert_eq!(model.len(), 10);
    /// ```
    #[cfg(feature = "presets")]
    pub fn load_named(&mut self, name: &str) -> Result<()> {
        let preset = name.parse()?;
        self.load_preset(preset);
        Ok(())
    }
}

// Algorithms
impl Model {
    /// Moves the cursor to the first element equal to `value` and returns its
    /// position, or moves it to the sentinel and returns `None`.
    pub fn find(&mut self, value: &str) -> Option<usize> {
        self.place_cursor("find", self.store.find(value));
        self.found()
    }

    /// Returns the number of elements equal to `value`. The cursor does not
    /// move.
    pub fn count(&self, value: &str) -> usize {
        self.store.count(value)
    }

    /// Moves the cursor to the first smallest element in natural order, or to
    /// the sentinel if the store is empty.
    pub fn min_element(&mut self) -> Option<usize> {
        self.place_cursor("min_element", self.store.min_position());
        self.found()
    }

    /// Moves the cursor to the first largest element in natural order, or to
    /// the sentinel if the store is empty.
    pub fn max_element(&mut self) -> Option<usize> {
        self.place_cursor("max_element", self.store.max_position());
        self.found()
    }

    pub fn is_sorted(&self) -> bool {
        self.store.is_sorted()
    }

    /// Moves the cursor to the first position whose element is not less than
    /// `value` and returns it.
    ///
    /// If the store is not sorted in natural order this returns
    /// [`Error::NotSorted`] and the cursor stays put.
    pub fn lower_bound(&mut self, value: &str) -> Result<usize> {
        let bound = self.store.lower_bound(value).map_err(declined("lower_bound"))?;
        self.place_cursor("lower_bound", bound);
        Ok(bound)
    }

    /// Moves the cursor to the first position whose element is greater than
    /// `value` and returns it.
    ///
    /// If the store is not sorted in natural order this returns
    /// [`Error::NotSorted`] and the cursor stays put.
    pub fn upper_bound(&mut self, value: &str) -> Result<usize> {
        let bound = self.store.upper_bound(value).map_err(declined("upper_bound"))?;
        self.place_cursor("upper_bound", bound);
        Ok(bound)
    }

    /// Sorts the content with `order` and resets the cursor.
    pub fn sort(&mut self, order: Order) {
        self.store.sort_by(|a, b| order.less(a, b));
        debug!("sorted in {} order", order);
        self.reset_cursor("sort");
    }

    /// Sorts the content in natural order and resets the cursor.
    pub fn merge_sort(&mut self) {
        self.sort(Order::Natural);
    }

    /// Sorts the content ignoring letter case and resets the cursor.
    pub fn merge_sort_case_free(&mut self) {
        self.sort(Order::CaseFree);
    }

    /// Removes consecutive duplicates and resets the cursor, returning how many
    /// elements were removed.
    ///
    /// If the store is not sorted in natural order this returns
    /// [`Error::NotSorted`] and changes nothing.
    pub fn unique(&mut self) -> Result<usize> {
        let removed = self.store.unique().map_err(declined("unique"))?;
        self.reset_cursor("unique");
        Ok(removed)
    }

    /// Reverses the content. The cursor keeps its position.
    pub fn reverse(&mut self) {
        self.store.reverse();
        debug!("reverse: cursor kept at {}", self.position);
    }

    /// Shuffles the content with the caller's random source. The cursor keeps
    /// its position.
    pub fn shuffle<R>(&mut self, rng: &mut R)
    where
        R: Rng + ?Sized,
    {
        self.store.shuffle(rng);
        debug!("shuffle: cursor kept at {}", self.position);
    }
}

fn declined(op: &'static str) -> impl Fn(Error) -> Error {
    move |err| {
        debug!("{}: declined, {}", op, err);
        err
    }
}
