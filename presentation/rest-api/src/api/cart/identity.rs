use poem::session::Session;

use business::domain::shared::value_objects::CartId;

/// Well-known session key holding the visitor's cart identifier.
pub const CART_ID_SESSION_KEY: &str = "cart_id";

/// Resolves the visitor's cart identity from the cookie session, minting
/// and storing a fresh one on first contact. Idempotent within a session:
/// repeated calls return the same identifier. The resolved id is threaded
/// explicitly into every cart use-case call; the engine itself never
/// touches session state.
pub fn resolve_cart_id(session: &Session) -> CartId {
    if let Some(existing) = session.get::<String>(CART_ID_SESSION_KEY) {
        return CartId::new(existing);
    }

    let minted = CartId::mint();
    session.set(CART_ID_SESSION_KEY, minted.as_str());
    minted
}
