//! v002: BELONGS_TO as a read-only view over CONTAINS.

pub const MIGRATION_SQL: &str = "
CREATE VIEW IF NOT EXISTS code_categories AS
    SELECT code, category_name FROM category_members;
";
