//! SQL schema for the raffle platform
//!
//! Statements are idempotent and applied in order at startup.

/// Complete raffle schema
pub const RAFFLE_SCHEMA: &[&str] = &[
    // ============================================
    // Users
    // ============================================
    r#"CREATE TABLE IF NOT EXISTS users (
        id TEXT PRIMARY KEY NOT NULL,
        wallet_address TEXT UNIQUE,
        email TEXT UNIQUE,
        username TEXT,
        total_participations INTEGER NOT NULL DEFAULT 0,
        total_points INTEGER NOT NULL DEFAULT 0,
        created_at TEXT NOT NULL,
        updated_at TEXT NOT NULL
    )"#,
    // ============================================
    // Organizers
    // ============================================
    r#"CREATE TABLE IF NOT EXISTS organizers (
        id TEXT PRIMARY KEY NOT NULL,
        name TEXT NOT NULL,
        wallet_address TEXT UNIQUE,
        email TEXT UNIQUE,
        password_hash TEXT,
        logo_url TEXT,
        total_chz_engaged TEXT NOT NULL DEFAULT '0',
        created_at TEXT NOT NULL,
        updated_at TEXT NOT NULL
    )"#,
    // ============================================
    // Seasons
    // ============================================
    r#"CREATE TABLE IF NOT EXISTS seasons (
        id TEXT PRIMARY KEY NOT NULL,
        name TEXT NOT NULL,
        start_date TEXT NOT NULL,
        end_date TEXT NOT NULL,
        is_active BOOLEAN NOT NULL DEFAULT 0
    )"#,
    r#"CREATE INDEX IF NOT EXISTS idx_seasons_active ON seasons (is_active)"#,
    // ============================================
    // Per-season organizer stats (written by ingestion)
    // ============================================
    r#"CREATE TABLE IF NOT EXISTS organizer_season_stats (
        organizer_id TEXT NOT NULL REFERENCES organizers (id),
        season_id TEXT NOT NULL REFERENCES seasons (id),
        total_chz_engaged TEXT NOT NULL DEFAULT '0',
        updated_at TEXT NOT NULL,
        PRIMARY KEY (organizer_id, season_id)
    )"#,
    r#"CREATE INDEX IF NOT EXISTS idx_season_stats_season ON organizer_season_stats (season_id)"#,
    // ============================================
    // Raffles
    // ============================================
    r#"CREATE TABLE IF NOT EXISTS raffles (
        id TEXT PRIMARY KEY NOT NULL,
        organizer_id TEXT NOT NULL REFERENCES organizers (id),
        season_id TEXT REFERENCES seasons (id),
        title TEXT NOT NULL,
        description TEXT,
        status TEXT NOT NULL CHECK (status IN ('DRAFT', 'ACTIVE', 'ENDED', 'CANCELLED')),
        contract_raffle_id INTEGER,
        ticket_price TEXT NOT NULL,
        token_symbol TEXT NOT NULL,
        created_at TEXT NOT NULL,
        updated_at TEXT NOT NULL
    )"#,
    r#"CREATE INDEX IF NOT EXISTS idx_raffles_status ON raffles (status)"#,
    r#"CREATE INDEX IF NOT EXISTS idx_raffles_organizer ON raffles (organizer_id)"#,
    // ============================================
    // Participations, one per (raffle, user)
    // ============================================
    r#"CREATE TABLE IF NOT EXISTS participations (
        id TEXT PRIMARY KEY NOT NULL,
        raffle_id TEXT NOT NULL REFERENCES raffles (id),
        user_id TEXT NOT NULL REFERENCES users (id),
        wallet_address TEXT NOT NULL,
        transaction_hash TEXT NOT NULL,
        amount_paid TEXT NOT NULL,
        token_used TEXT NOT NULL,
        points_earned INTEGER NOT NULL,
        created_at TEXT NOT NULL,
        UNIQUE (raffle_id, user_id)
    )"#,
    r#"CREATE INDEX IF NOT EXISTS idx_participations_user ON participations (user_id)"#,
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_schema_defines_all_tables() {
        let schema = RAFFLE_SCHEMA.join("\n");
        for table in [
            "users",
            "organizers",
            "seasons",
            "organizer_season_stats",
            "raffles",
            "participations",
        ] {
            assert!(
                schema.contains(&format!("CREATE TABLE IF NOT EXISTS {} (", table)),
                "missing table {}",
                table
            );
        }
        assert!(schema.contains("UNIQUE (raffle_id, user_id)"));
    }
}
