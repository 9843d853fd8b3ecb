// SPDX-FileCopyrightText: 2026 Mattia Egloff <mattia.egloff@pm.me>
//
// SPDX-License-Identifier: GPL-3.0-or-later

//! Weighted Ordering
//!
//! One ordering rule shared by the edit form and the rendered link list:
//! ascending weight, ties keep their incoming (registry) order.

use std::cmp::Ordering;

/// Anything carrying a display weight.
pub trait Weighted {
    /// Lower weights sort first.
    fn weight(&self) -> i32;
}

impl<T: Weighted + ?Sized> Weighted for &T {
    fn weight(&self) -> i32 {
        (**self).weight()
    }
}

/// Compares two weighted items by weight alone.
pub fn compare_weight<T: Weighted>(a: &T, b: &T) -> Ordering {
    a.weight().cmp(&b.weight())
}

/// Sorts items by ascending weight.
///
/// The sort is stable: items with equal weight keep their relative order.
pub fn sort_by_weight<T: Weighted>(items: &mut [T]) {
    items.sort_by(compare_weight);
}

/// Sorts items by ascending weight read through `weight_of`.
///
/// Stable, like [`sort_by_weight`].
pub fn sort_by_weight_with<T, F>(items: &mut [T], weight_of: F)
where
    F: Fn(&T) -> i32,
{
    items.sort_by_key(weight_of);
}
