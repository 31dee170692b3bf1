// Copyright (c) 2025 Felix Kahle.
//
// Permission is hereby granted, free of charge, to any person obtaining
// a copy of this software and associated documentation files (the
// "Software"), to deal in the Software without restriction, including
// without limitation the rights to use, copy, modify, merge, publish,
// distribute, sublicense, and/or sell copies of the Software, and to
// permit persons to whom the Software is furnished to do so, subject to
// the following conditions:
//
// The above copyright notice and this permission notice shall be
// included in all copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND,
// EXPRESS OR IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF
// MERCHANTABILITY, FITNESS FOR A PARTICULAR PURPOSE AND
// NONINFRINGEMENT. IN NO EVENT SHALL THE AUTHORS OR COPYRIGHT HOLDERS BE
// LIABLE FOR ANY CLAIM, DAMAGES OR OTHER LIABILITY, WHETHER IN AN ACTION
// OF CONTRACT, TORT OR OTHERWISE, ARISING FROM, OUT OF OR IN CONNECTION
// WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE SOFTWARE.

use chainlist_core::prelude::SinglyLinkedList;

/// Moves the first racer matching `ally` to the front of the roster by
/// rotation, so every other racer keeps its relative order. Reports whether
/// the roster changed: a roster shorter than two racers, an ally already in
/// front, or an ally not on the roster all leave it untouched.
pub fn bring_ally_to_front<T>(roster: &mut SinglyLinkedList<T>, ally: &T) -> bool
where
    T: PartialEq,
{
    let Some(position) = roster.iter().position(|racer| racer == ally) else {
        tracing::debug!("ally is not on the roster, order unchanged");
        return false;
    };
    if position == 0 {
        tracing::debug!("ally already leads the roster");
        return false;
    }
    roster.rotate_left(position);
    tracing::debug!(position, "rotated ally to the front of the roster");
    true
}
