pub const DEFAULT_DATABASE_URL: &str = "sqlite:///var/lib/sidenotes/notes.db";
pub const DEFAULT_MAX_CONNECTIONS: u32 = 5;

/// Fixed page size for note listing, not client-configurable.
pub const NOTES_PER_PAGE: u32 = 10;
