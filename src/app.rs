// src/app.rs
//
// Forme standard — module App (racine)
// ------------------------------------
// Rôle:
// - Déclarer les sous-modules (etat.rs + vue.rs)
// - Ré-exporter AppForme (pour main.rs: use forme_standard::app::AppForme;)
// - Fournir l'impl eframe::App (compatible NATIF + WEB)
//
// Important:
// - La gestion Enter est faite dans vue.rs (au bon endroit: quand le champ
//   a le focus).

pub mod etat;
pub mod vue;

// Ré-export pratique : `use forme_standard::app::AppForme;`
pub use etat::AppForme;

use eframe::egui;

impl eframe::App for AppForme {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // Raccourci clavier global minimal (safe natif + web) :
        // ESC = effacer seulement l'entrée (comme bouton "C").
        let esc = ctx.input(|i| i.key_pressed(egui::Key::Escape));
        if esc {
            self.clear_entree();
        }

        egui::CentralPanel::default().show(ctx, |ui| {
            self.ui(ui);
        });
    }
}
