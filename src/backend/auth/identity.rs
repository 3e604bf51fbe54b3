/**
 * Identity Operations
 *
 * Registration, credential checks and lookups for both principal kinds on
 * top of [`IdentityStore`]. Passwords are hashed with bcrypt on the blocking
 * pool; emails are trimmed before they are stored or looked up.
 */

use uuid::Uuid;

use crate::backend::error::BackendError;
use crate::backend::store::IdentityStore;
use crate::shared::{Admin, Collaborator, PrincipalKind, Profile};

/// A loaded admin or collaborator
#[derive(Debug, Clone)]
pub enum Principal {
    Admin(Admin),
    Collaborator(Collaborator),
}

impl Principal {
    pub fn id(&self) -> Uuid {
        match self {
            Principal::Admin(a) => a.id,
            Principal::Collaborator(c) => c.id,
        }
    }

    pub fn email(&self) -> &str {
        match self {
            Principal::Admin(a) => &a.email,
            Principal::Collaborator(c) => &c.email,
        }
    }

    pub fn kind(&self) -> PrincipalKind {
        match self {
            Principal::Admin(_) => PrincipalKind::Admin,
            Principal::Collaborator(_) => PrincipalKind::Collaborator,
        }
    }

    fn password_hash(&self) -> &str {
        match self {
            Principal::Admin(a) => &a.password_hash,
            Principal::Collaborator(c) => &c.password_hash,
        }
    }

    /// Public view without the password hash
    pub fn profile(&self) -> Profile {
        match self {
            Principal::Admin(a) => Profile::from(a),
            Principal::Collaborator(c) => Profile::from(c),
        }
    }
}

/// Label used in "... not found" messages
pub fn not_found_message(kind: PrincipalKind) -> &'static str {
    match kind {
        PrincipalKind::Admin => "Admin not found",
        PrincipalKind::Collaborator => "Collaborator not found",
    }
}

/// Hash a password with bcrypt off the async executor
pub async fn hash_password(password: String, cost: u32) -> Result<String, BackendError> {
    tokio::task::spawn_blocking(move || bcrypt::hash(password, cost))
        .await
        .map_err(|e| BackendError::internal("Server error", e))?
        .map_err(|e| {
            tracing::error!("Failed to hash password: {:?}", e);
            BackendError::internal("Server error", e)
        })
}

/// Check a password against a stored bcrypt hash
pub async fn verify_password(password: String, hash: String) -> Result<bool, BackendError> {
    tokio::task::spawn_blocking(move || bcrypt::verify(password, &hash))
        .await
        .map_err(|e| BackendError::internal("Server error", e))?
        .map_err(|e| {
            tracing::error!("Password verification error: {:?}", e);
            BackendError::internal("Server error", e)
        })
}

/// Look up a principal of `kind` by email
pub async fn find_by_email(
    store: &dyn IdentityStore,
    kind: PrincipalKind,
    email: &str,
) -> Result<Option<Principal>, BackendError> {
    let email = email.trim();
    let found = match kind {
        PrincipalKind::Admin => store.admin_by_email(email).await?.map(Principal::Admin),
        PrincipalKind::Collaborator => store
            .collaborator_by_email(email)
            .await?
            .map(Principal::Collaborator),
    };
    Ok(found)
}

/// Look up a principal of `kind` by id
pub async fn find_by_id(
    store: &dyn IdentityStore,
    kind: PrincipalKind,
    id: Uuid,
) -> Result<Option<Principal>, BackendError> {
    let found = match kind {
        PrincipalKind::Admin => store.admin_by_id(id).await?.map(Principal::Admin),
        PrincipalKind::Collaborator => store.collaborator_by_id(id).await?.map(Principal::Collaborator),
    };
    Ok(found)
}

/// Register a new principal
///
/// # Arguments
/// * `store` - Identity store
/// * `kind` - Admin or collaborator
/// * `name` - Display name
/// * `email` - Email, unique per kind
/// * `password` - Plain text password, hashed before storage
/// * `cost` - bcrypt cost factor
///
/// # Returns
/// The stored principal, or `Conflict` if the email is taken
pub async fn register(
    store: &dyn IdentityStore,
    kind: PrincipalKind,
    name: &str,
    email: &str,
    password: &str,
    cost: u32,
) -> Result<Principal, BackendError> {
    let name = name.trim().to_string();
    let email = email.trim().to_string();

    if find_by_email(store, kind, &email).await?.is_some() {
        tracing::warn!("Email already exists for {}: {}", kind, email);
        return Err(BackendError::conflict("Email already exists"));
    }

    let password_hash = hash_password(password.to_string(), cost).await?;

    // The store enforces uniqueness again; a concurrent signup surfaces as Conflict.
    let principal = match kind {
        PrincipalKind::Admin => {
            Principal::Admin(store.insert_admin(Admin::new(name, email, password_hash)).await?)
        }
        PrincipalKind::Collaborator => Principal::Collaborator(
            store
                .insert_collaborator(Collaborator::new(name, email, password_hash))
                .await?,
        ),
    };

    tracing::info!("{} registered: {} ({})", kind, principal.email(), principal.id());
    Ok(principal)
}

/// Verify email and password
///
/// Unknown email and wrong password both fail with the same
/// `Unauthorized("Invalid credentials")`.
pub async fn verify_credentials(
    store: &dyn IdentityStore,
    kind: PrincipalKind,
    email: &str,
    password: &str,
) -> Result<Principal, BackendError> {
    let principal = find_by_email(store, kind, email).await?.ok_or_else(|| {
        tracing::warn!("{} not found: {}", kind, email.trim());
        BackendError::unauthorized("Invalid credentials")
    })?;

    let valid = verify_password(password.to_string(), principal.password_hash().to_string()).await?;
    if !valid {
        tracing::warn!("Invalid password for {}: {}", kind, principal.email());
        return Err(BackendError::unauthorized("Invalid credentials"));
    }

    Ok(principal)
}
