//! Database schema and migrations for plank.
//!
//! This module contains all database migrations that will be applied
//! sequentially when the database is first opened or upgraded.

/// Database migrations.
///
/// Each migration is a SQL script that will be executed in order.
/// The schema_version table tracks which migrations have been applied.
pub const MIGRATIONS: &[&str] = &[
    // v1: Initial schema - users table
    r#"
-- Users table for authentication and identity
CREATE TABLE users (
    id               INTEGER PRIMARY KEY AUTOINCREMENT,
    email            TEXT NOT NULL,
    username         TEXT NOT NULL UNIQUE,
    full_name        TEXT NOT NULL,
    hashed_password  TEXT NOT NULL,           -- Argon2 hash
    is_active        INTEGER NOT NULL DEFAULT 1,
    is_superuser     INTEGER NOT NULL DEFAULT 0,
    is_verified      INTEGER NOT NULL DEFAULT 0
);

CREATE INDEX idx_users_username ON users(username);
"#,
    // v2: Boards table
    r#"
-- Boards: named, ownable containers for posts, public or private.
-- The UNIQUE constraint on name is the authoritative duplicate guard;
-- the service-layer pre-check is advisory only.
CREATE TABLE boards (
    id          INTEGER PRIMARY KEY AUTOINCREMENT,
    name        TEXT NOT NULL UNIQUE,
    public      INTEGER NOT NULL DEFAULT 1,
    creator_id  INTEGER NOT NULL REFERENCES users(id),
    created_at  TEXT NOT NULL DEFAULT (datetime('now'))
);

CREATE INDEX idx_boards_creator_id ON boards(creator_id);
"#,
    // v3: Posts table
    r#"
-- Posts: titled messages belonging to exactly one board.
-- Titles are unique per board; deleting a board removes its posts.
CREATE TABLE posts (
    id          INTEGER PRIMARY KEY AUTOINCREMENT,
    title       TEXT NOT NULL,
    content     TEXT NOT NULL,
    creator_id  INTEGER NOT NULL REFERENCES users(id),
    board_id    INTEGER NOT NULL REFERENCES boards(id) ON DELETE CASCADE,
    created_at  TEXT NOT NULL DEFAULT (datetime('now')),
    UNIQUE(board_id, title)
);

CREATE INDEX idx_posts_board_id ON posts(board_id);
CREATE INDEX idx_posts_creator_id ON posts(creator_id);
CREATE INDEX idx_posts_created_at ON posts(created_at);
"#,
];
