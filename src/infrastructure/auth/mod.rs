mod session;

pub use session::{
    AuthError, AuthenticatedUser, Claims, JwtSessionVerifier, SessionVerifier,
    session_auth_middleware,
};
