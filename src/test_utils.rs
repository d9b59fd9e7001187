// Copyright 2021. remilia-dev
// This source code is licensed under GPLv3 or any later version.
use std::cell::Cell;

/// A value that counts its drops in a shared cell.
///
/// Tests store one inside the value under test to observe when (and how many
/// times) it gets dropped.
pub struct DropTally<'a> {
    drops: &'a Cell<u32>,
}

impl<'a> DropTally<'a> {
    pub fn new(drops: &'a Cell<u32>) -> Self {
        DropTally { drops }
    }
}

impl Drop for DropTally<'_> {
    fn drop(&mut self) {
        self.drops.set(self.drops.get() + 1);
    }
}
