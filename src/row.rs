use std::fmt;

pub const COLUMN_USERNAME_SIZE: usize = 32;
pub const COLUMN_EMAIL_SIZE: usize = 255;
pub const ID_SIZE: usize = size_of::<u32>();
pub const USERNAME_SIZE: usize = COLUMN_USERNAME_SIZE;
pub const EMAIL_SIZE: usize = COLUMN_EMAIL_SIZE;

pub const ID_OFFSET: usize = 0;
pub const USERNAME_OFFSET: usize = ID_OFFSET + ID_SIZE;
pub const EMAIL_OFFSET: usize = USERNAME_OFFSET + USERNAME_SIZE;
pub const ROW_SIZE: usize = ID_SIZE + USERNAME_SIZE + EMAIL_SIZE;

/// One record of the hardcoded (id, username, email) schema. Immutable
/// once built; the validator guarantees both strings fit their slots.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Row {
    pub id: u32,
    pub username: String,
    pub email: String,
}

impl Row {
    pub fn new(id: u32, username: &str, email: &str) -> Self {
        Self {
            id,
            username: username.to_string(),
            email: email.to_string(),
        }
    }

    /// Packs the row into a `ROW_SIZE` slot: little-endian id, then the
    /// username and email bytes zero-padded to their fixed widths.
    pub fn serialize_into(&self, slot: &mut [u8]) {
        debug_assert_eq!(slot.len(), ROW_SIZE);
        slot[ID_OFFSET..USERNAME_OFFSET].copy_from_slice(&self.id.to_le_bytes());
        write_text(&mut slot[USERNAME_OFFSET..EMAIL_OFFSET], &self.username);
        write_text(&mut slot[EMAIL_OFFSET..ROW_SIZE], &self.email);
    }

    /// Exact inverse of `serialize_into`. Text fields end at the first
    /// NUL byte or the slot boundary, whichever comes first.
    pub fn deserialize(slot: &[u8]) -> Self {
        debug_assert_eq!(slot.len(), ROW_SIZE);
        let id = u32::from_le_bytes([slot[0], slot[1], slot[2], slot[3]]);
        Self {
            id,
            username: read_text(&slot[USERNAME_OFFSET..EMAIL_OFFSET]),
            email: read_text(&slot[EMAIL_OFFSET..ROW_SIZE]),
        }
    }
}

impl fmt::Display for Row {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}, {})", self.id, self.username, self.email)
    }
}

fn write_text(slot: &mut [u8], text: &str) {
    let bytes = text.as_bytes();
    slot[..bytes.len()].copy_from_slice(bytes);
    slot[bytes.len()..].fill(0);
}

fn read_text(slot: &[u8]) -> String {
    let end = slot.iter().position(|&b| b == 0).unwrap_or(slot.len());
    String::from_utf8_lossy(&slot[..end]).into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn round_trips_through_a_slot() {
        let row = Row::new(1, "user1", "person1@example.com");
        let mut slot = [0u8; ROW_SIZE];

        row.serialize_into(&mut slot);

        assert_eq!(Row::deserialize(&slot), row);
    }

    #[test]
    fn round_trips_maximum_width_fields() {
        let row = Row::new(
            u32::MAX,
            &"a".repeat(USERNAME_SIZE),
            &"b".repeat(EMAIL_SIZE),
        );
        let mut slot = [0u8; ROW_SIZE];

        row.serialize_into(&mut slot);

        assert_eq!(Row::deserialize(&slot), row);
    }

    #[test]
    fn overwriting_a_slot_leaves_no_stale_bytes() {
        let mut slot = [0u8; ROW_SIZE];
        Row::new(1, &"a".repeat(USERNAME_SIZE), &"b".repeat(EMAIL_SIZE)).serialize_into(&mut slot);
        Row::new(2, "u", "e").serialize_into(&mut slot);

        assert_eq!(Row::deserialize(&slot), Row::new(2, "u", "e"));
    }

    #[test]
    fn zeroed_slot_decodes_to_empty_strings() {
        let slot = [0u8; ROW_SIZE];
        let row = Row::deserialize(&slot);

        assert_eq!(row, Row::new(0, "", ""));
    }

    #[test]
    fn displays_as_a_tuple() {
        let row = Row::new(1, "user", "user@gmail.com");

        assert_eq!(row.to_string(), "(1, user, user@gmail.com)");
    }
}
