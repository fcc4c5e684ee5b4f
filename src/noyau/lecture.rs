// src/noyau/lecture.rs
//
// Lecture d'une chaîne décimale/scientifique vers une forme standard.
//
// Grammaire acceptée (marqueur d'exposant insensible à la casse) :
//   [+|-] chiffres [ "." chiffres ] [ e|E [+|-] entier ]
// avec au moins un chiffre dans le coefficient. Tout le reste est refusé,
// chaque faute avec sa propre variante d'ErreurLecture (jamais de troncature
// silencieuse).
//
// Le filtrage est fait à la main, caractère par caractère ; la conversion
// numérique finale passe par FromStr (arrondi correct du f64).

use core::num::IntErrorKind;

use super::canon::canon_forme;
use super::erreurs::ErreurLecture;
use super::forme::FormeStandard;

/// Lit un nombre décimal/scientifique et le met en forme standard.
pub fn lire_forme(texte: &str) -> Result<FormeStandard, ErreurLecture> {
    let s = texte.trim();
    if s.is_empty() {
        return Err(ErreurLecture::EntreeVide);
    }

    // Découpe sur le premier marqueur d'exposant ; un second 'e' éventuel
    // reste dans la partie exposant et sera refusé par lit_exposant.
    let (partie_coeff, partie_expo) = match s.find(['e', 'E']) {
        Some(i) => (&s[..i], Some(&s[i + 1..])),
        None => (s, None),
    };

    let coefficient = lit_coefficient(partie_coeff)?;
    let exposant = match partie_expo {
        Some(txt) => lit_exposant(txt)?,
        None => 0,
    };

    // Seul le débordement d'exposant peut encore survenir ici :
    // le coefficient est déjà garanti fini.
    canon_forme(coefficient, exposant).map_err(|_| ErreurLecture::Debordement)
}

/// Filtre puis convertit la partie coefficient (avant le marqueur d'exposant).
fn lit_coefficient(txt: &str) -> Result<f64, ErreurLecture> {
    let mut chiffres = 0usize;
    let mut points = 0usize;
    let mut signes = 0usize;

    for (i, c) in txt.chars().enumerate() {
        match c {
            '0'..='9' => chiffres += 1,
            '.' => {
                points += 1;
                if points > 1 {
                    return Err(ErreurLecture::PointDouble);
                }
            }
            '+' | '-' => {
                signes += 1;
                if signes > 1 {
                    return Err(ErreurLecture::SigneDouble);
                }
                // un signe unique n'est admis qu'en tête
                if i != 0 {
                    return Err(ErreurLecture::CaractereInattendu(c));
                }
            }
            autre => return Err(ErreurLecture::CaractereInattendu(autre)),
        }
    }

    if chiffres == 0 {
        return Err(ErreurLecture::AucunChiffre);
    }

    // Le filtre ci-dessus garantit un littéral f64 valide.
    let valeur: f64 = txt.parse().map_err(|_| ErreurLecture::AucunChiffre)?;

    if !valeur.is_finite() {
        return Err(ErreurLecture::Debordement);
    }
    Ok(valeur)
}

/// Convertit la partie exposant (après le marqueur) en entier signé.
fn lit_exposant(txt: &str) -> Result<i32, ErreurLecture> {
    txt.parse::<i32>().map_err(|e| match e.kind() {
        // un littéral d'exposant hors i32 est un débordement, pas une faute de syntaxe
        IntErrorKind::PosOverflow | IntErrorKind::NegOverflow => ErreurLecture::Debordement,
        _ => ErreurLecture::ExposantInvalide(txt.to_string()),
    })
}
