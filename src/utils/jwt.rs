use crate::errors::{Error, Result};
use jsonwebtoken::{
    DecodingKey, EncodingKey, Header, TokenData, Validation, decode, encode, errors::ErrorKind,
};

#[derive(Debug, serde::Serialize, serde::Deserialize)]
pub struct Claims {
    /// External identity-provider subject, matched against `users.authId`.
    pub sub: String,
    pub exp: usize,
    pub iat: usize,
    pub iss: String,
}

fn secret() -> String {
    std::env::var("JWT_SECRET").unwrap_or_else(|_| "dev-secret".to_string())
}

pub fn encode_jwt(claim: &Claims) -> Result<String> {
    let token = encode(
        &Header::default(),
        claim,
        &EncodingKey::from_secret(secret().as_ref()),
    )?;
    Ok(token)
}

pub fn decode_jwt(token: &str) -> Result<TokenData<Claims>> {
    decode::<Claims>(
        token,
        &DecodingKey::from_secret(secret().as_ref()),
        &Validation::default(),
    )
    .map_err(|err| match err.kind() {
        ErrorKind::ExpiredSignature => Error::TokenExpired,
        _ => Error::InvalidToken,
    })
}
