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

use crate::list::index::NodeIndex;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NotAMemberError {
    index: NodeIndex,
}

impl NotAMemberError {
    #[inline]
    pub fn new(index: NodeIndex) -> Self {
        Self { index }
    }

    #[inline]
    pub fn index(&self) -> NodeIndex {
        self.index
    }
}

impl std::fmt::Display for NotAMemberError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} does not name a live node of this list", self.index)
    }
}

impl std::error::Error for NotAMemberError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_names_the_offending_index() {
        let err = NotAMemberError::new(NodeIndex(4));
        assert_eq!(err.index(), NodeIndex(4));
        assert_eq!(
            format!("{}", err),
            "NodeIndex(4) does not name a live node of this list"
        );
    }
}
