//! Noyau forme standard
//!
//! Organisation interne :
//! - forme.rs   : type FormeStandard + invariant + conversions/ordre
//! - canon.rs   : mise en forme canonique (mantisse ∈ [1,10[ ou zéro)
//! - lecture.rs : lecture d'une chaîne décimale/scientifique
//! - format.rs  : notation scientifique + notation ingénieur
//! - trig.rs    : fonctions trig/hyperboliques et réciproques
//! - erreurs.rs : taxonomie des erreurs (nombre / lecture / domaine)

pub mod canon;
pub mod erreurs;
pub mod format;
pub mod forme;
pub mod lecture;
pub mod trig;

#[cfg(test)]
mod tests_scientifiques;


// API publique minimale
pub use canon::canon_forme;
pub use erreurs::{ErreurDomaine, ErreurLecture, ErreurNombre};
pub use format::{format_ingenieur, format_scientifique};
pub use forme::FormeStandard;
pub use lecture::lire_forme;
pub use trig::Fonction;
