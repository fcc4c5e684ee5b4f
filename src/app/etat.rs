//! src/app/etat.rs
//!
//! État UI (sans vue, sans noyau).
//!
//! Rôle : contenir l'état du convertisseur (entrée, notations affichées,
//! erreur, historique, valeur courante) et offrir des opérations simples
//! (C/CLR/AC) sans logique d'affichage.
//!
//! Contrats :
//! - Aucune lecture ni calcul ici (pas de parsing, pas de trig) : la vue
//!   prépare les chaînes, l'état ne fait que les ranger.
//! - Actions déterministes, sans effet de bord caché.
//! - Garde-fou : l'historique est borné.

use crate::noyau::FormeStandard;

/// Garde-fou : taille maximale de l'historique (anti-gel mémoire).
const HISTORIQUE_MAX: usize = 50;

#[derive(Clone, Debug)]
pub struct AppForme {
    // --- entrée utilisateur ---
    pub entree: String,

    // --- sorties (préparées par la vue) ---
    pub scientifique: String,
    pub ingenieur: String,
    pub decimal: String,
    pub erreur: String,
    pub resultat_dispo: bool,

    // --- valeur courante (pour enchaîner les fonctions) ---
    pub courante: Option<FormeStandard>,

    // --- historique des conversions/applications ---
    pub historique: Vec<String>,

    // --- UX ---
    // Permet à vue.rs de redonner le focus à l'entrée après un clic.
    pub focus_entree: bool,
}

impl Default for AppForme {
    fn default() -> Self {
        Self {
            entree: String::new(),
            scientifique: String::new(),
            ingenieur: String::new(),
            decimal: String::new(),
            erreur: String::new(),
            resultat_dispo: false, // au démarrage : rien à lire
            courante: None,
            historique: Vec::new(),
            focus_entree: true, // au lancement, on veut pouvoir taper tout de suite
        }
    }
}

impl AppForme {
    /* ------------------------ Actions "boutons" (état seulement) ------------------------ */

    /// AC : remise à zéro totale (entrée + résultats + historique).
    pub fn reset_total(&mut self) {
        self.entree.clear();
        self.clear_resultats();
        self.historique.clear();
        self.focus_entree = true;
    }

    /// C : effacer seulement l'entrée (sans toucher aux résultats).
    pub fn clear_entree(&mut self) {
        self.entree.clear();
        self.focus_entree = true;
    }

    /// CLR : effacer résultats + erreur + valeur courante (entrée conservée).
    pub fn clear_resultats(&mut self) {
        self.scientifique.clear();
        self.ingenieur.clear();
        self.decimal.clear();
        self.erreur.clear();
        self.resultat_dispo = false;
        self.courante = None;
        self.focus_entree = true;
    }

    /// Utilitaire : placer une erreur.
    ///
    /// Choix UX : on CONSERVE les dernières notations affichées (pas
    /// d'écran vidé sur une faute), mais la valeur courante devient
    /// inutilisable pour enchaîner.
    pub fn set_erreur(&mut self, msg: impl Into<String>) {
        self.erreur = msg.into();
        self.courante = None;
        self.focus_entree = true;
    }

    /// Utilitaire : déposer un résultat complet (notations préparées + forme).
    pub fn set_resultats(
        &mut self,
        scientifique: impl Into<String>,
        ingenieur: impl Into<String>,
        decimal: impl Into<String>,
        forme: FormeStandard,
    ) {
        self.erreur.clear();
        self.scientifique = scientifique.into();
        self.ingenieur = ingenieur.into();
        self.decimal = decimal.into();
        self.resultat_dispo = true;
        self.courante = Some(forme);
        self.focus_entree = true;
    }

    /// Ajoute une ligne d'historique ; les doublons consécutifs sont ignorés
    /// et la liste reste bornée.
    pub fn pousse_historique(&mut self, ligne: impl Into<String>) {
        let ligne = ligne.into();
        if self.historique.last() == Some(&ligne) {
            return;
        }
        self.historique.push(ligne);
        if self.historique.len() > HISTORIQUE_MAX {
            self.historique.remove(0);
        }
    }
}
