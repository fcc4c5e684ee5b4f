// src/noyau/format.rs
//
// Affichage d'une forme standard :
// - notation scientifique : "<mantisse>e<exposant>"  (ex: 1.5e2, 2.5e-3)
// - notation ingénieur    : "<mantisse>*10^<exposant>" avec exposant multiple
//   de 3 et mantisse dans [1, 1000[ (ex: 150*10^0, 2.5*10^-3) ; zéro -> "0"
//
// La mantisse est rendue par le Display du f64 : nombre minimal de chiffres
// significatifs qui relisent le même double. Les deux fonctions sont pures
// et n'échouent jamais pour une forme respectant l'invariant.

use super::forme::FormeStandard;

/// Notation scientifique.
#[must_use]
pub fn format_scientifique(forme: &FormeStandard) -> String {
    format!("{}e{}", forme.mantisse(), forme.exposant())
}

/// Notation ingénieur : exposant ramené au multiple de 3 inférieur,
/// mantisse décalée d'autant de décades vers la gauche.
#[must_use]
pub fn format_ingenieur(forme: &FormeStandard) -> String {
    if forme.mantisse() == 0.0 {
        return "0".to_string();
    }

    // reste ∈ {0, 1, 2} même pour un exposant négatif
    let reste = forme.exposant().rem_euclid(3);
    let mantisse = forme.mantisse() * 10f64.powi(reste);

    // en i64 : exposant() - reste sortirait de l'i32 pour i32::MIN
    let exposant = i64::from(forme.exposant()) - i64::from(reste);

    format!("{mantisse}*10^{exposant}")
}
