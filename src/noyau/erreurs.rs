// src/noyau/erreurs.rs
//
// Taxonomie des erreurs du noyau :
// - ErreurNombre  : entrée numérique invalide à la construction
// - ErreurLecture : chaîne refusée par la lecture (une variante par faute)
// - ErreurDomaine : argument hors domaine d'une fonction réciproque
//
// Contrat : chaque erreur porte assez de contexte (valeur fautive, contrainte
// violée) pour afficher un message lisible tel quel. Aucune n'est rattrapée
// en silence dans le noyau.

use thiserror::Error;

/// Entrée numérique invalide à la construction d'une forme standard.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum ErreurNombre {
    /// Mantisse NaN ou infinie : aucune forme standard ne peut la représenter.
    #[error("mantisse non finie : {0}")]
    MantisseNonFinie(f64),

    /// L'exposant sort des bornes de l'entier pendant la mise en forme.
    #[error("exposant hors limites (débordement à la normalisation)")]
    ExposantDeborde,
}

/// Chaîne refusée par `lire_forme`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ErreurLecture {
    #[error("entrée vide")]
    EntreeVide,

    /// Le coefficient ne contient aucun chiffre (ex: ".", "+", "e5").
    #[error("aucun chiffre dans le coefficient")]
    AucunChiffre,

    #[error("plus d'un point décimal")]
    PointDouble,

    #[error("plus d'un signe")]
    SigneDouble,

    #[error("caractère inattendu : '{0}'")]
    CaractereInattendu(char),

    /// Partie exposant absente ou illisible comme entier (ex: "1e", "1e5.2").
    #[error("exposant invalide : {0:?}")]
    ExposantInvalide(String),

    /// Valeur hors des limites représentables (coefficient vers ±∞,
    /// ou exposant hors des bornes de l'entier).
    #[error("débordement numérique")]
    Debordement,
}

/// Argument hors du domaine d'une fonction trigonométrique/hyperbolique réciproque.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum ErreurDomaine {
    #[error("asin({0}) : argument hors de [-1, 1]")]
    Asin(f64),

    #[error("acos({0}) : argument hors de [-1, 1]")]
    Acos(f64),

    #[error("acosh({0}) : argument < 1")]
    Acosh(f64),

    #[error("atanh({0}) : argument hors de ]-1, 1[")]
    Atanh(f64),
}
