/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 18/10/26
******************************************************************************/
/// Token payloads and claim decoding
pub mod auth;
/// Response envelope shared by every endpoint
pub mod envelope;
/// HTTP request helper with envelope unwrapping and diagnostics
pub mod http;
/// Request bodies
pub mod requests;
