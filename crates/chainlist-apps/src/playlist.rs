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

use chainlist_core::prelude::{DoublyLinkedList, NodeIndex};

/// Play queue with a cursor for the currently playing track and a paid
/// flag deciding whether ads get spliced in.
#[derive(Debug, Clone)]
pub struct MusicPlayer<T> {
    songs: DoublyLinkedList<T>,
    playing: Option<NodeIndex>,
    paid: bool,
}

impl<T> MusicPlayer<T> {
    #[inline]
    pub fn new(paid: bool) -> Self {
        Self {
            songs: DoublyLinkedList::new(),
            playing: None,
            paid,
        }
    }

    #[inline]
    pub fn songs(&self) -> &DoublyLinkedList<T> {
        &self.songs
    }

    #[inline]
    pub fn is_paid(&self) -> bool {
        self.paid
    }

    #[inline]
    pub fn playing_index(&self) -> Option<NodeIndex> {
        self.playing
    }

    #[inline]
    pub fn now_playing(&self) -> Option<&T> {
        self.playing.and_then(|index| self.songs.value(index))
    }

    /// Appends a track; it becomes the playing track when nothing is.
    pub fn enqueue(&mut self, song: T) -> NodeIndex {
        let index = self.songs.push_back(song);
        if self.playing.is_none() {
            self.playing = Some(index);
        }
        index
    }

    /// Moves the cursor to the next track; `None` once the queue runs out.
    pub fn advance(&mut self) -> Option<&T> {
        self.playing = self
            .playing
            .and_then(|index| self.songs.next_index(index));
        self.now_playing()
    }

    /// Queues `favorite` directly after the playing track. An existing
    /// match is moved (the last one when `prefer_last_match`, else the
    /// first); otherwise a new track is spliced in. When the cursor sits on
    /// the tail, or nothing is playing, the favorite goes to the back.
    pub fn play_favorite_next(&mut self, favorite: T, prefer_last_match: bool)
    where
        T: PartialEq,
    {
        if self.songs.is_empty() {
            let index = self.songs.push_back(favorite);
            self.playing = Some(index);
            tracing::debug!("queued favorite into an empty playlist");
            return;
        }

        let matches = self.songs.find_all(&favorite);
        let chosen = if prefer_last_match {
            matches.last()
        } else {
            matches.first()
        }
        .copied();

        let value = match chosen {
            Some(index) if Some(index) == self.playing => {
                tracing::debug!("favorite is already playing, queue unchanged");
                return;
            }
            Some(index) => self.songs.remove_node(index),
            None => favorite,
        };

        match self.playing {
            Some(playing) if self.songs.next_index(playing).is_some() => {
                self.songs.insert_after(playing, value);
            }
            _ => {
                self.songs.push_back(value);
            }
        }
        tracing::debug!(moved = chosen.is_some(), "favorite queued up next");
    }

    /// Splices an ad after every track matching `favorite`, for unpaid
    /// accounts. Of a run of consecutive favorites only every other one
    /// gets an ad, starting with the first; inserted ads are skipped by the
    /// scan, never treated as tracks.
    pub fn insert_ads(&mut self, ad: T, favorite: &T)
    where
        T: PartialEq + Clone,
    {
        if self.paid {
            tracing::debug!("paid account, no ads to insert");
            return;
        }

        let mut inserted = 0usize;
        let mut just_inserted = false;
        let mut cursor = self.songs.head_index();
        while let Some(index) = cursor {
            let is_match = self.songs.value(index) == Some(favorite);
            if is_match && !just_inserted {
                let ad_index = self.songs.insert_after(index, ad.clone());
                inserted += 1;
                just_inserted = true;
                cursor = self.songs.next_index(ad_index);
            } else {
                just_inserted = false;
                cursor = self.songs.next_index(index);
            }
        }
        tracing::debug!(inserted, "ad insertion pass finished");
    }
}
