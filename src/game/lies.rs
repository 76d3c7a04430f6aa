//! Record of every obfuscated position in a game

/// One corrupted verdict
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Lie {
    pub round: usize,
    pub position: usize,
}

/// Append-only log of lies, one entry per obfuscated round
///
/// Owned by the round controller for the lifetime of one game and read back when the
/// game ends to reveal where the player was misled.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LieLog {
    entries: Vec<Lie>,
}

impl LieLog {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, round: usize, position: usize) {
        self.entries.push(Lie { round, position });
    }

    #[must_use]
    pub fn entries(&self) -> &[Lie] {
        &self.entries
    }

    /// Position lied about in `round`, if that round was obfuscated
    #[must_use]
    pub fn position_for(&self, round: usize) -> Option<usize> {
        self.entries
            .iter()
            .find(|lie| lie.round == round)
            .map(|lie| lie.position)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Lie> {
        self.entries.iter()
    }
}

impl<'a> IntoIterator for &'a LieLog {
    type Item = &'a Lie;
    type IntoIter = std::slice::Iter<'a, Lie>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}
