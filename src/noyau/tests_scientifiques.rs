//! Tests scientifiques (campagne) : invariants + scénarios de référence.
//!
//! But : vérifier les propriétés observables du noyau, pas son découpage.
//! - invariant de forme sur tout ce que le noyau produit
//! - aller-retour lecture -> valeur contre le parseur f64 de la stdlib
//! - idempotence de la mise en forme
//! - propriétés de la notation ingénieur (exposant multiple de 3)
//! - domaines des réciproques
//! - scénarios fixes servant de non-régression

use super::canon::canon_forme;
use super::erreurs::ErreurDomaine;
use super::format::{format_ingenieur, format_scientifique};
use super::forme::FormeStandard;
use super::lecture::lire_forme;
use super::trig::Fonction;

fn ok_forme(texte: &str) -> FormeStandard {
    lire_forme(texte).unwrap_or_else(|e| panic!("lire_forme({texte:?}) erreur: {e}"))
}

fn assert_invariant(f: &FormeStandard, contexte: &str) {
    let m = f.mantisse().abs();
    assert!(
        (m == 0.0 && f.exposant() == 0) || (1.0..10.0).contains(&m),
        "invariant violé ({contexte}) : mantisse={} exposant={}",
        f.mantisse(),
        f.exposant()
    );
}

/* ------------------------ Invariant de forme ------------------------ */

#[test]
fn sci_invariant_apres_construction() {
    for (m, e) in [
        (150.0, 0),
        (0.0025, 0),
        (-750.0, 4),
        (9.9999, -12),
        (0.1, 5),
        (1.0, 0),
        (0.0, 0),
    ] {
        let f = canon_forme(m, e).unwrap();
        assert_invariant(&f, &format!("canon({m}, {e})"));
    }
}

#[test]
fn sci_invariant_apres_lecture() {
    for s in [
        "150", "0.0025", "-42", "+7", "1e300", "3.25e-17", "0", ".5", "9.",
    ] {
        let f = ok_forme(s);
        assert_invariant(&f, s);
    }
}

#[test]
fn sci_invariant_apres_trig() {
    let entrees = [
        ok_forme("0"),
        ok_forme("0.5"),
        ok_forme("-0.5"),
        ok_forme("1"),
        ok_forme("3.14159"),
    ];
    for f in Fonction::TOUTES {
        for x in &entrees {
            if let Ok(r) = f.applique(*x) {
                assert_invariant(&r, &format!("{}({x:?})", f.nom()));
            }
        }
    }
}

/* ------------------------ Aller-retour lecture ------------------------ */

#[test]
fn sci_aller_retour_contre_stdlib() {
    for s in [
        "150",
        "0.0025",
        "1.23e3",
        "2.5E-2",
        "-9.80665",
        "6.02214076e23",
        "1.616255e-35",
        "42",
        "0.1",
    ] {
        let attendu: f64 = s.parse().unwrap();
        let lu = ok_forme(s).en_f64();
        // quelques ulps : powi(exposant) n'est pas toujours arrondi au plus près
        assert!(
            (lu - attendu).abs() <= attendu.abs() * 4.0 * f64::EPSILON,
            "{s} : lu {lu}, attendu {attendu}"
        );
    }
}

#[test]
fn sci_idempotence_canon() {
    for s in ["150", "0.0025", "-3.7e11", "9.999999", "1e-300"] {
        let f = ok_forme(s);
        let g = canon_forme(f.mantisse(), f.exposant()).unwrap();
        assert_eq!(f.mantisse(), g.mantisse(), "{s}");
        assert_eq!(f.exposant(), g.exposant(), "{s}");
    }
}

/* ------------------------ Notation ingénieur ------------------------ */

#[test]
fn sci_ingenieur_exposant_multiple_de_trois() {
    for e in -13..=13 {
        let f = canon_forme(2.5, e).unwrap();
        let texte = format_ingenieur(&f);
        let (_, expo_txt) = texte
            .split_once("*10^")
            .unwrap_or_else(|| panic!("notation inattendue : {texte}"));
        let expo: i64 = expo_txt.parse().unwrap();
        assert_eq!(expo.rem_euclid(3), 0, "{texte}");
    }
}

#[test]
fn sci_ingenieur_mantisse_dans_la_fenetre() {
    for e in -7..=7 {
        for m in [1.0, 2.5, 9.9, -1.0, -9.9] {
            let f = canon_forme(m, e).unwrap();
            let reste = f.exposant().rem_euclid(3);
            let mantisse_aff = f.mantisse().abs() * 10f64.powi(reste);
            assert!(
                (1.0..1000.0).contains(&mantisse_aff),
                "({m}, {e}) -> mantisse ingénieur {mantisse_aff}"
            );
        }
    }
}

/* ------------------------ Domaines des réciproques ------------------------ */

#[test]
fn sci_domaines_reciproques() {
    // asin/acos : [-1, 1], bornes incluses
    assert!(ok_forme("1").asin().is_ok());
    assert!(ok_forme("-1").acos().is_ok());
    assert!(matches!(
        ok_forme("1.0000001").asin(),
        Err(ErreurDomaine::Asin(_))
    ));
    assert!(matches!(
        ok_forme("-1.5").acos(),
        Err(ErreurDomaine::Acos(_))
    ));

    // acosh : [1, +∞[
    assert!(ok_forme("1").acosh().is_ok());
    assert!(matches!(
        ok_forme("0.999").acosh(),
        Err(ErreurDomaine::Acosh(_))
    ));

    // atanh : ]-1, 1[, bornes exclues
    assert!(ok_forme("0.999").atanh().is_ok());
    assert!(matches!(
        ok_forme("1").atanh(),
        Err(ErreurDomaine::Atanh(_))
    ));
    assert!(matches!(
        ok_forme("-1").atanh(),
        Err(ErreurDomaine::Atanh(_))
    ));
}

/* ------------------------ Scénarios de référence ------------------------ */

#[test]
fn sci_scenario_cent_cinquante() {
    let f = ok_forme("150");
    assert_eq!(f.mantisse(), 1.5);
    assert_eq!(f.exposant(), 2);
    assert_eq!(f.en_f64(), 150.0);
}

#[test]
fn sci_scenario_petit_decimal() {
    let f = ok_forme("0.0025");
    assert_eq!(f.mantisse(), 2.5);
    assert_eq!(f.exposant(), -3);
    assert_eq!(f.en_f64(), 0.0025);
}

#[test]
fn sci_scenario_ingenieur() {
    let f = FormeStandard::nouvelle(1.5, 2).unwrap();
    assert_eq!(format_ingenieur(&f), "150*10^0");
}

#[test]
fn sci_scenario_sin_de_zero() {
    let zero = FormeStandard::nouvelle(0.0, 0).unwrap();
    let r = zero.sin();
    assert_eq!(r.mantisse(), 0.0);
    assert_eq!(r.exposant(), 0);
}

#[test]
fn sci_scenario_asin_hors_domaine() {
    let f = FormeStandard::nouvelle(1.5, 0).unwrap();
    assert_eq!(f.asin(), Err(ErreurDomaine::Asin(1.5)));
}

#[test]
fn sci_scenario_point_double() {
    use super::erreurs::ErreurLecture;
    assert_eq!(lire_forme("1..2"), Err(ErreurLecture::PointDouble));
}

/* ------------------------ Cohérence des affichages ------------------------ */

#[test]
fn sci_scientifique_relisible() {
    // la notation scientifique produite est elle-même une entrée valide
    for s in ["150", "0.0025", "-3.7e11", "9.999999e-7"] {
        let f = ok_forme(s);
        let texte = format_scientifique(&f);
        let relu = ok_forme(&texte);
        assert_eq!(f.mantisse(), relu.mantisse(), "{s} -> {texte}");
        assert_eq!(f.exposant(), relu.exposant(), "{s} -> {texte}");
    }
}
