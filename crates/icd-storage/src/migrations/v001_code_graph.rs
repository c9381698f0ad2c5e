//! v001: categories, codes, CONTAINS edges, HAS_SUBCATEGORY edges.

pub const MIGRATION_SQL: &str = "
CREATE TABLE IF NOT EXISTS categories (
    name        TEXT PRIMARY KEY,
    created_at  TEXT NOT NULL DEFAULT (strftime('%Y-%m-%dT%H:%M:%fZ', 'now')),
    updated_at  TEXT NOT NULL DEFAULT (strftime('%Y-%m-%dT%H:%M:%fZ', 'now'))
);

CREATE TABLE IF NOT EXISTS codes (
    code           TEXT PRIMARY KEY,
    category_code  TEXT NOT NULL,
    subcategory    TEXT,
    short_desc     TEXT NOT NULL DEFAULT '',
    long_desc      TEXT NOT NULL DEFAULT '',
    created_at     TEXT NOT NULL DEFAULT (strftime('%Y-%m-%dT%H:%M:%fZ', 'now')),
    updated_at     TEXT NOT NULL DEFAULT (strftime('%Y-%m-%dT%H:%M:%fZ', 'now'))
);

CREATE INDEX IF NOT EXISTS idx_codes_category_code ON codes(category_code);

-- CONTAINS: keyed by code, so each code has exactly one category.
CREATE TABLE IF NOT EXISTS category_members (
    code           TEXT PRIMARY KEY,
    category_name  TEXT NOT NULL,
    created_at     TEXT NOT NULL DEFAULT (strftime('%Y-%m-%dT%H:%M:%fZ', 'now')),
    FOREIGN KEY (code) REFERENCES codes(code) ON DELETE CASCADE,
    FOREIGN KEY (category_name) REFERENCES categories(name) ON DELETE CASCADE
);

CREATE INDEX IF NOT EXISTS idx_members_category ON category_members(category_name);

-- HAS_SUBCATEGORY: parent code -> child code.
CREATE TABLE IF NOT EXISTS code_hierarchy (
    parent_code  TEXT NOT NULL,
    child_code   TEXT NOT NULL,
    created_at   TEXT NOT NULL DEFAULT (strftime('%Y-%m-%dT%H:%M:%fZ', 'now')),
    PRIMARY KEY (parent_code, child_code),
    FOREIGN KEY (parent_code) REFERENCES codes(code) ON DELETE CASCADE,
    FOREIGN KEY (child_code) REFERENCES codes(code) ON DELETE CASCADE
);

CREATE INDEX IF NOT EXISTS idx_hierarchy_child ON code_hierarchy(child_code);
";
