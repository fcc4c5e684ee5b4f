//! Forme standard
//!
//! Noyau numérique : un type valeur `FormeStandard` (mantisse × 10^exposant,
//! mantisse dans [1,10[ ou zéro), sa lecture depuis une chaîne, ses notations
//! scientifique et ingénieur, et les douze fonctions transcendantes qui
//! préservent l'invariant. Le module `app` est une démonstration (eframe)
//! qui ne fait que consommer cette API.

pub mod app;
pub mod noyau;

pub use noyau::{
    canon_forme, format_ingenieur, format_scientifique, lire_forme, ErreurDomaine, ErreurLecture,
    ErreurNombre, Fonction, FormeStandard,
};
