//! SQLite schema definition.

/// Complete database schema for the pet clinic.
///
/// Visit IDs use AUTOINCREMENT so a deleted visit's ID is never handed out
/// again; the update flow relies on that.
pub const SCHEMA: &str = r#"
-- Enable foreign keys
PRAGMA foreign_keys = ON;

-- ============================================================================
-- Owners
-- ============================================================================

CREATE TABLE IF NOT EXISTS owners (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    first_name TEXT NOT NULL,
    last_name TEXT NOT NULL,
    address TEXT NOT NULL DEFAULT '',
    city TEXT NOT NULL DEFAULT '',
    telephone TEXT NOT NULL DEFAULT ''
);

CREATE INDEX IF NOT EXISTS idx_owners_last_name ON owners(last_name);

-- ============================================================================
-- Pets
-- ============================================================================

CREATE TABLE IF NOT EXISTS pets (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    name TEXT NOT NULL,
    birth_date TEXT,                             -- YYYY-MM-DD
    type_name TEXT NOT NULL,
    owner_id INTEGER NOT NULL REFERENCES owners(id)
);

CREATE INDEX IF NOT EXISTS idx_pets_owner ON pets(owner_id);

-- ============================================================================
-- Vets
-- ============================================================================

CREATE TABLE IF NOT EXISTS vets (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    first_name TEXT NOT NULL,
    last_name TEXT NOT NULL,
    specialties TEXT NOT NULL DEFAULT '[]'      -- JSON array of strings
);

-- ============================================================================
-- Visits
-- ============================================================================

CREATE TABLE IF NOT EXISTS visits (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    pet_id INTEGER NOT NULL REFERENCES pets(id),
    vet_id INTEGER REFERENCES vets(id),
    visit_date TEXT NOT NULL,                    -- YYYY-MM-DD
    description TEXT NOT NULL,
    canceled INTEGER NOT NULL DEFAULT 0
);

CREATE INDEX IF NOT EXISTS idx_visits_pet ON visits(pet_id);
"#;
