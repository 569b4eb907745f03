//! User Service Implementation

use raffle_core::{ActionError, ActionOutcome, Identity, NewUser, Participation, User, UserStatsReport};
use std::sync::Arc;

use super::{normalize_wallet, require_text};
use crate::entities::UserRow;
use crate::error::DbError;
use crate::repos::RaffleDatabase;

/// User Service
pub struct UserService {
    database: Arc<RaffleDatabase>,
}

impl UserService {
    /// Create a new User Service
    pub fn new(database: Arc<RaffleDatabase>) -> Self {
        Self { database }
    }

    /// Register a user by email and/or wallet
    pub async fn register_user(&self, input: NewUser) -> ActionOutcome<User> {
        let input = Self::normalize(input)?;

        if let Some(wallet) = &input.wallet_address {
            if self.database.users.get_by_wallet(wallet).await?.is_some() {
                return Err(ActionError::conflict("Wallet address is already registered"));
            }
        }
        if let Some(email) = &input.email {
            if self.database.users.get_by_email(email).await?.is_some() {
                return Err(ActionError::conflict("Email is already registered"));
            }
        }

        let row = self.database.users.create(&UserRow::new(input)).await?;
        tracing::info!(user_id = %row.id, "User registered");
        Ok(row.into())
    }

    /// Resolve the user behind a verified wallet session
    ///
    /// The first successful login creates the user.
    pub async fn login_with_wallet(&self, identity: &Identity) -> ActionOutcome<User> {
        if !identity.verified {
            return Err(ActionError::unauthorized("Wallet ownership is not verified"));
        }
        let wallet = identity
            .wallet_address
            .as_deref()
            .map(normalize_wallet)
            .filter(|w| !w.is_empty())
            .ok_or_else(|| ActionError::unauthorized("Session has no wallet address"))?;

        if let Some(row) = self.database.users.get_by_wallet(&wallet).await? {
            return Ok(row.into());
        }

        let row = UserRow::new(NewUser {
            wallet_address: Some(wallet.clone()),
            email: identity.email.clone(),
            username: None,
        });

        match self.database.users.create(&row).await {
            Ok(row) => {
                tracing::info!(user_id = %row.id, "User created on first wallet login");
                Ok(row.into())
            }
            // Lost a race with a concurrent login for the same wallet
            Err(DbError::AlreadyExists(_)) => self
                .database
                .users
                .get_by_wallet(&wallet)
                .await?
                .map(User::from)
                .ok_or_else(|| ActionError::conflict("Email is already registered")),
            Err(e) => Err(e.into()),
        }
    }

    pub async fn get_user(&self, user_id: &str) -> ActionOutcome<User> {
        self.database
            .users
            .get_by_id(user_id)
            .await?
            .map(User::from)
            .ok_or_else(|| ActionError::not_found("User", user_id))
    }

    pub async fn get_user_by_wallet(&self, wallet_address: &str) -> ActionOutcome<Option<User>> {
        let wallet = normalize_wallet(wallet_address);
        Ok(self.database.users.get_by_wallet(&wallet).await?.map(User::from))
    }

    /// Stored counters together with the rows they summarize
    pub async fn get_user_stats(&self, user_id: &str) -> ActionOutcome<UserStatsReport> {
        let user = self.get_user(user_id).await?;
        let participations = self.list_user_participations(user_id).await?;

        Ok(UserStatsReport {
            user_id: user.id.clone(),
            stats: user.stats(),
            participations,
        })
    }

    pub async fn list_user_participations(&self, user_id: &str) -> ActionOutcome<Vec<Participation>> {
        let rows = self.database.participations.list_for_user(user_id).await?;
        Ok(rows.into_iter().map(Participation::from).collect())
    }

    fn normalize(input: NewUser) -> ActionOutcome<NewUser> {
        let wallet_address = input
            .wallet_address
            .map(|w| normalize_wallet(&w))
            .filter(|w| !w.is_empty());
        let email = input
            .email
            .map(|e| e.trim().to_lowercase())
            .filter(|e| !e.is_empty());
        let username = match input.username {
            Some(name) => Some(require_text("username", &name)?),
            None => None,
        };

        if wallet_address.is_none() && email.is_none() {
            return Err(ActionError::invalid_field(
                "email",
                "an email or a wallet address is required",
            ));
        }
        if let Some(email) = &email {
            if !email.contains('@') {
                return Err(ActionError::invalid_field("email", "is not a valid address"));
            }
        }

        Ok(NewUser {
            wallet_address,
            email,
            username,
        })
    }
}
