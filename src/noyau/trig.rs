// src/noyau/trig.rs
//
// Fonctions transcendantes sur la forme standard :
// sin cos tan / asin acos atan / sinh cosh tanh / asinh acosh atanh
//
// Algorithme commun : opérande -> f64 -> fonction réelle standard -> remise
// en forme canonique. Les réciproques à domaine restreint vérifient leur
// argument et échouent avec ErreurDomaine ; les autres sont totales.
//
// Comportement flottant natif : un tan près d'un multiple impair de π/2
// renvoie l'approximation finie du double, jamais une erreur. Un double non
// fini (opérande au-delà de la plage du f64, ou débordement de sinh/cosh)
// est ramené au double fini le plus proche avant remise en forme.

use super::canon::canon_f64;
use super::erreurs::ErreurDomaine;
use super::forme::FormeStandard;

/// Ramène ±∞ au double fini le plus proche ; laisse le reste inchangé.
fn borne_finie(x: f64) -> f64 {
    x.clamp(f64::MIN, f64::MAX)
}

macro_rules! fonctions_totales {
    ($( $(#[$attr:meta])* $fn:ident )*) => {
        impl FormeStandard {
            $(
                $(#[$attr])*
                #[must_use]
                pub fn $fn(self) -> Self {
                    let x = borne_finie(self.en_f64());
                    canon_f64(borne_finie(x.$fn()))
                }
            )*
        }
    };
}

fonctions_totales!(
    /// Sinus (radians).
    sin
    /// Cosinus (radians).
    cos
    /// Tangente (radians).
    tan
    /// Sinus hyperbolique.
    sinh
    /// Cosinus hyperbolique.
    cosh
    /// Tangente hyperbolique.
    tanh
    /// Argument sinus hyperbolique.
    asinh
);

impl FormeStandard {
    /// Arc sinus. Échoue si la valeur sort de `[-1, 1]`.
    pub fn asin(self) -> Result<Self, ErreurDomaine> {
        let x = self.en_f64();
        if !(-1.0..=1.0).contains(&x) {
            return Err(ErreurDomaine::Asin(x));
        }
        Ok(canon_f64(x.asin()))
    }

    /// Arc cosinus. Échoue si la valeur sort de `[-1, 1]`.
    pub fn acos(self) -> Result<Self, ErreurDomaine> {
        let x = self.en_f64();
        if !(-1.0..=1.0).contains(&x) {
            return Err(ErreurDomaine::Acos(x));
        }
        Ok(canon_f64(x.acos()))
    }

    /// Arc tangente. Totale (le Result aligne la signature sur les autres
    /// réciproques ; aucune valeur ne le fait échouer).
    pub fn atan(self) -> Result<Self, ErreurDomaine> {
        Ok(canon_f64(borne_finie(self.en_f64()).atan()))
    }

    /// Argument cosinus hyperbolique. Échoue si la valeur est `< 1`.
    pub fn acosh(self) -> Result<Self, ErreurDomaine> {
        let x = self.en_f64();
        if x < 1.0 {
            return Err(ErreurDomaine::Acosh(x));
        }
        Ok(canon_f64(borne_finie(x).acosh()))
    }

    /// Argument tangente hyperbolique. Échoue hors de `]-1, 1[`
    /// (bornes exclues).
    pub fn atanh(self) -> Result<Self, ErreurDomaine> {
        let x = self.en_f64();
        if x <= -1.0 || x >= 1.0 {
            return Err(ErreurDomaine::Atanh(x));
        }
        Ok(canon_f64(x.atanh()))
    }
}

/* ------------------------ Dispatch pour les appelants ------------------------ */

/// Les douze fonctions transcendantes, sous forme de donnée (boutons de
/// l'interface, tables de tests).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Fonction {
    Sin,
    Cos,
    Tan,
    Asin,
    Acos,
    Atan,
    Sinh,
    Cosh,
    Tanh,
    Asinh,
    Acosh,
    Atanh,
}

impl Fonction {
    /// Les douze, dans l'ordre d'affichage.
    pub const TOUTES: [Fonction; 12] = [
        Fonction::Sin,
        Fonction::Cos,
        Fonction::Tan,
        Fonction::Asin,
        Fonction::Acos,
        Fonction::Atan,
        Fonction::Sinh,
        Fonction::Cosh,
        Fonction::Tanh,
        Fonction::Asinh,
        Fonction::Acosh,
        Fonction::Atanh,
    ];

    /// Nom mathématique usuel.
    #[must_use]
    pub const fn nom(self) -> &'static str {
        match self {
            Fonction::Sin => "sin",
            Fonction::Cos => "cos",
            Fonction::Tan => "tan",
            Fonction::Asin => "asin",
            Fonction::Acos => "acos",
            Fonction::Atan => "atan",
            Fonction::Sinh => "sinh",
            Fonction::Cosh => "cosh",
            Fonction::Tanh => "tanh",
            Fonction::Asinh => "asinh",
            Fonction::Acosh => "acosh",
            Fonction::Atanh => "atanh",
        }
    }

    /// Applique la fonction à une forme. Les fonctions totales ne renvoient
    /// jamais l'erreur.
    pub fn applique(self, forme: FormeStandard) -> Result<FormeStandard, ErreurDomaine> {
        match self {
            Fonction::Sin => Ok(forme.sin()),
            Fonction::Cos => Ok(forme.cos()),
            Fonction::Tan => Ok(forme.tan()),
            Fonction::Asin => forme.asin(),
            Fonction::Acos => forme.acos(),
            Fonction::Atan => forme.atan(),
            Fonction::Sinh => Ok(forme.sinh()),
            Fonction::Cosh => Ok(forme.cosh()),
            Fonction::Tanh => Ok(forme.tanh()),
            Fonction::Asinh => Ok(forme.asinh()),
            Fonction::Acosh => forme.acosh(),
            Fonction::Atanh => forme.atanh(),
        }
    }
}
