//! Character-suffix trie.
//!
//! Each label trie node owns one of these, recording the reversed character
//! chains of the labels that terminated a pattern at that node. It answers
//! one question during matching: does a candidate label *end with* one of
//! the recorded labels? That is what lets pattern `car.google.com` catch
//! `supercar.google.com` without an exact label hit.

/// Lowercase letters plus hyphen.
const CHAR_SLOTS: usize = 27;
const HYPHEN_SLOT: usize = 26;

type Slots = [Option<CharNode>; CHAR_SLOTS];

/// One recorded character, scanning right-to-left through a label.
///
/// `next` absent means the recorded label is fully consumed at this
/// character; a suffix walk arriving here succeeds.
#[derive(Debug, Default)]
struct CharNode {
    next: Option<Box<Slots>>,
}

/// Slot index for a byte, or `None` for bytes outside the alphabet.
///
/// Digits are legal in labels but have no slot: a candidate label can only
/// complete a walk over characters that are stored, and a stored chain with
/// a digit could never be walked, so both sides of the mismatch resolve to
/// "no suffix match" (see [`CharTrie::insert`]).
fn slot_index(byte: u8) -> Option<usize> {
    match byte {
        b'a'..=b'z' => Some((byte - b'a') as usize),
        b'-' => Some(HYPHEN_SLOT),
        _ => None,
    }
}

/// Per-trie-level suffix index over terminal labels.
#[derive(Debug, Default)]
pub(crate) struct CharTrie {
    slots: Box<Slots>,
}

impl CharTrie {
    /// Record `label` so that any label ending with it matches.
    ///
    /// Characters are inserted back-to-front; the chain head keeps `next`
    /// absent as the end marker unless a longer recorded label already
    /// continues through it. A label containing a byte with no slot is not
    /// recorded at all: partial insertion would leave a chain that lies
    /// about where a recorded label ends.
    pub(crate) fn insert(&mut self, label: &str) {
        let indices: Option<Vec<usize>> = label.bytes().map(slot_index).collect();
        let Some(indices) = indices else {
            return;
        };

        let mut slots = &mut self.slots;
        for (pos, &slot) in indices.iter().enumerate().rev() {
            let node = slots[slot].get_or_insert_with(CharNode::default);
            if pos == 0 {
                break;
            }
            slots = node.next.get_or_insert_with(Box::default);
        }
    }

    /// Walk `label` back-to-front against the recorded chains.
    ///
    /// An edge miss fails. An edge whose node has no continuation succeeds
    /// even with candidate characters left over; the candidate ends with
    /// the (shorter) recorded label. A candidate exhausted while the
    /// recorded chain continues, or exactly at its end, fails; the
    /// equal-length case is the exact match already handled by the label
    /// trie itself.
    pub(crate) fn matches(&self, label: &str) -> bool {
        let bytes = label.as_bytes();
        let mut slots = &*self.slots;
        for pos in (0..bytes.len()).rev() {
            let Some(slot) = slot_index(bytes[pos]) else {
                return false;
            };
            let Some(node) = slots[slot].as_ref() else {
                return false;
            };
            if pos == 0 {
                return false;
            }
            match node.next.as_deref() {
                None => return true,
                Some(next) => slots = next,
            }
        }
        false
    }
}
