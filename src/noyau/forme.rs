// src/noyau/forme.rs

use core::cmp::Ordering;
use core::str::FromStr;

use num_traits::{FromPrimitive, ToPrimitive};

use super::canon::{canon_f64, canon_forme};
use super::erreurs::{ErreurLecture, ErreurNombre};
use super::format::format_scientifique;
use super::lecture::lire_forme;

/// Nombre en forme standard : `mantisse × 10^exposant`.
///
/// Invariant (maintenu par toutes les opérations du noyau) :
/// - soit `mantisse == 0` et `exposant == 0` (le zéro),
/// - soit `1 ≤ |mantisse| < 10`.
///
/// La mantisse n'est jamais NaN ni infinie : toute demande de ce genre échoue
/// à la construction. L'exposant est un `i32` : la forme peut donc représenter
/// des grandeurs au-delà de la plage finie du `f64` (la conversion `en_f64`
/// arrondit alors vers ±∞, sémantique IEEE).
#[derive(Clone, Copy, PartialEq)]
pub struct FormeStandard {
    mantisse: f64,
    exposant: i32,
}

impl FormeStandard {
    /// Construit une forme standard à partir d'un couple (mantisse, exposant)
    /// quelconque, remis en forme canonique.
    ///
    /// Échoue avec [`ErreurNombre`] si la mantisse est NaN/infinie ou si la
    /// remise en forme fait déborder l'exposant.
    pub fn nouvelle(mantisse: f64, exposant: i32) -> Result<Self, ErreurNombre> {
        canon_forme(mantisse, exposant)
    }

    /// Construction interne sans remise en forme. Réservée au noyau :
    /// l'appelant garantit l'invariant.
    pub(crate) const fn brute(mantisse: f64, exposant: i32) -> Self {
        Self { mantisse, exposant }
    }

    /// Mantisse (dans `[1, 10[` en valeur absolue, ou `0`).
    #[must_use]
    pub const fn mantisse(&self) -> f64 {
        self.mantisse
    }

    /// Exposant (puissance de 10).
    #[must_use]
    pub const fn exposant(&self) -> i32 {
        self.exposant
    }

    /// Valeur `f64` représentée : `mantisse × 10^exposant`.
    ///
    /// Totale : pour un exposant au-delà de la plage finie du `f64`, le
    /// produit arrondit vers ±∞ (ou vers 0 côté sous-normal), comme le ferait
    /// l'opération flottante elle-même.
    #[must_use]
    pub fn en_f64(&self) -> f64 {
        self.mantisse * 10f64.powi(self.exposant)
    }
}

/* ------------------------ Défaut / affichage ------------------------ */

impl Default for FormeStandard {
    /// La valeur 1 (mantisse 1, exposant 0).
    fn default() -> Self {
        Self::brute(1.0, 0)
    }
}

impl core::fmt::Display for FormeStandard {
    /// Décimal ordinaire pour les petits exposants, scientifique au-delà.
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        if self.exposant > 4 || self.exposant < -4 {
            return write!(f, "{}", format_scientifique(self));
        }
        write!(f, "{}", self.en_f64())
    }
}

impl core::fmt::Debug for FormeStandard {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(f, "{self}")
    }
}

/* ------------------------ Ordre total ------------------------ */

/// Classe de signe de la mantisse : -1, 0 ou 1 (le zéro canonique a mantisse 0).
fn classe_signe(m: f64) -> i8 {
    if m == 0.0 {
        0
    } else if m < 0.0 {
        -1
    } else {
        1
    }
}

impl Eq for FormeStandard {}

impl Ord for FormeStandard {
    fn cmp(&self, other: &Self) -> Ordering {
        let ca = classe_signe(self.mantisse);
        let cb = classe_signe(other.mantisse);
        if ca != cb {
            return ca.cmp(&cb);
        }
        if ca == 0 {
            return Ordering::Equal;
        }

        // Même signe : ordre des grandeurs (exposant, |mantisse|),
        // inversé pour les négatifs.
        let grandeur = self
            .exposant
            .cmp(&other.exposant)
            .then_with(|| self.mantisse.abs().total_cmp(&other.mantisse.abs()));

        if ca < 0 {
            grandeur.reverse()
        } else {
            grandeur
        }
    }
}

impl PartialOrd for FormeStandard {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/* ------------------------ Conversions ------------------------ */

impl From<FormeStandard> for f64 {
    fn from(valeur: FormeStandard) -> Self {
        valeur.en_f64()
    }
}

impl TryFrom<f64> for FormeStandard {
    type Error = ErreurNombre;

    fn try_from(valeur: f64) -> Result<Self, Self::Error> {
        canon_forme(valeur, 0)
    }
}

impl TryFrom<f32> for FormeStandard {
    type Error = ErreurNombre;

    fn try_from(valeur: f32) -> Result<Self, Self::Error> {
        canon_forme(f64::from(valeur), 0)
    }
}

impl FromStr for FormeStandard {
    type Err = ErreurLecture;

    fn from_str(texte: &str) -> Result<Self, Self::Err> {
        lire_forme(texte)
    }
}

// Les entiers machine sont toujours finis : la conversion ne peut pas échouer.
macro_rules! depuis_entier {
    ($($t:ty),*) => {
        $(
            impl From<$t> for FormeStandard {
                fn from(valeur: $t) -> Self {
                    canon_f64(valeur as f64)
                }
            }
        )*
    };
}

depuis_entier!(u8, u16, u32, u64, i8, i16, i32, i64);

impl ToPrimitive for FormeStandard {
    fn to_f64(&self) -> Option<f64> {
        Some(self.en_f64())
    }

    fn to_i64(&self) -> Option<i64> {
        self.en_f64().to_i64()
    }

    fn to_u64(&self) -> Option<u64> {
        self.en_f64().to_u64()
    }
}

impl FromPrimitive for FormeStandard {
    fn from_i64(n: i64) -> Option<Self> {
        Some(Self::from(n))
    }

    fn from_u64(n: u64) -> Option<Self> {
        Some(Self::from(n))
    }

    fn from_f64(n: f64) -> Option<Self> {
        Self::try_from(n).ok()
    }
}
