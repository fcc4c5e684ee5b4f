// src/app/vue.rs
//
// Vue (UI egui) — natif + web
// ---------------------------
// Objectifs :
// - Même AppForme (etat.rs) pour natif + wasm
// - Clavier : Enter convertit (quand le champ a le focus)
// - Tactile : gros boutons, focus redonné après clic (focus_entree)
// - Les douze fonctions s'appliquent à la valeur courante (enchaînables)

use eframe::egui;

use crate::noyau::{format_ingenieur, format_scientifique, lire_forme, Fonction, FormeStandard};

use super::etat::AppForme;

impl AppForme {
    /// UI principale : à appeler depuis eframe::App::update(...)
    pub fn ui(&mut self, ui: &mut egui::Ui) {
        ui.spacing_mut().item_spacing = egui::vec2(6.0, 6.0);

        egui::ScrollArea::vertical()
            .auto_shrink([false, false])
            .show(ui, |ui| {
                ui.heading("Forme standard");
                ui.add_space(6.0);

                self.ui_entree(ui);

                ui.add_space(8.0);
                ui.separator();
                ui.add_space(8.0);

                self.ui_resultats(ui);

                ui.add_space(8.0);
                ui.separator();
                ui.add_space(8.0);

                self.ui_fonctions(ui);

                ui.add_space(8.0);
                ui.separator();
                ui.add_space(8.0);

                self.ui_historique(ui);
            });
    }

    fn ui_entree(&mut self, ui: &mut egui::Ui) {
        ui.label("Entrée :");

        // id stable + focus contrôlé
        let resp = ui.add(
            egui::TextEdit::singleline(&mut self.entree)
                .desired_width(ui.available_width())
                .hint_text("Ex: 150, 0.0025, 1.23e3, -2.5E-2")
                .id_source("entree_edit")
                .code_editor(),
        );

        if self.focus_entree {
            resp.request_focus();
            self.focus_entree = false;
        }

        // Enter convertit, seulement si le champ a le focus (pas de
        // déclenchement global quand on clique ailleurs).
        let enter = ui.input(|i| i.key_pressed(egui::Key::Enter));
        if resp.has_focus() && enter {
            self.convertit_via_noyau();
            self.focus_entree = true;
        }

        ui.add_space(6.0);

        ui.horizontal(|ui| {
            // Contrat: C = entrée seulement ; CLR = résultats seulement ; AC = tout
            self.bouton_action(ui, "C", "Efface seulement l'entrée", Action::ClearEntree);
            self.bouton_action(
                ui,
                "CLR",
                "Efface résultats + erreur",
                Action::ClearResultats,
            );
            self.bouton_action(ui, "AC", "Remise à zéro totale", Action::ResetTotal);

            ui.add_space(10.0);

            let eq = ui.add_sized([64.0, 32.0], egui::Button::new("="));
            if eq.clicked() {
                self.convertit_via_noyau();
                self.focus_entree = true;
            }
        });

        ui.add_space(8.0);

        self.ui_pave_numerique(ui);

        if !self.erreur.is_empty() {
            ui.add_space(6.0);
            ui.colored_label(ui.visuals().error_fg_color, &self.erreur);
        }
    }

    fn ui_pave_numerique(&mut self, ui: &mut egui::Ui) {
        egui::Grid::new("pave_numerique_forme")
            .num_columns(4)
            .spacing([6.0, 6.0])
            .show(ui, |ui| {
                self.bouton_insert(ui, "7", "7");
                self.bouton_insert(ui, "8", "8");
                self.bouton_insert(ui, "9", "9");
                self.bouton_action(ui, "DEL", "Efface le dernier caractère", Action::Backspace);
                ui.end_row();

                self.bouton_insert(ui, "4", "4");
                self.bouton_insert(ui, "5", "5");
                self.bouton_insert(ui, "6", "6");
                self.bouton_insert(ui, "e", "e");
                ui.end_row();

                self.bouton_insert(ui, "1", "1");
                self.bouton_insert(ui, "2", "2");
                self.bouton_insert(ui, "3", "3");
                self.bouton_insert(ui, ".", ".");
                ui.end_row();

                self.bouton_insert(ui, "0", "0");
                self.bouton_insert(ui, "-", "-");
                ui.label("");
                ui.label("");
                ui.end_row();
            });
    }

    fn ui_resultats(&mut self, ui: &mut egui::Ui) {
        ui.label("Scientifique :");
        Self::champ_monospace(ui, "scientifique_out", &self.scientifique, 1);

        ui.add_space(6.0);

        ui.label("Ingénieur :");
        Self::champ_monospace(ui, "ingenieur_out", &self.ingenieur, 1);

        ui.add_space(6.0);

        ui.label("Décimal :");
        if self.resultat_dispo {
            Self::champ_monospace(ui, "decimal_out", &self.decimal, 1);
        } else {
            ui.monospace("indisponible");
        }
    }

    fn ui_fonctions(&mut self, ui: &mut egui::Ui) {
        ui.label("Fonctions (appliquées à la valeur courante) :");
        ui.horizontal_wrapped(|ui| {
            for f in Fonction::TOUTES {
                let resp = ui.add_sized([56.0, 28.0], egui::Button::new(f.nom()));
                if resp.clicked() {
                    self.applique_fonction(f);
                    self.focus_entree = true;
                }
            }
        });
    }

    fn ui_historique(&mut self, ui: &mut egui::Ui) {
        egui::CollapsingHeader::new("Historique")
            .default_open(true)
            .show(ui, |ui| {
                if self.historique.is_empty() {
                    ui.monospace("(vide)");
                    return;
                }
                for ligne in self.historique.iter().rev() {
                    ui.monospace(ligne);
                }
            });
    }

    fn champ_monospace(ui: &mut egui::Ui, id: &str, contenu: &str, rows: usize) {
        // Affichage lecture seule "stable", sans TextEdit interactif.
        egui::Frame::group(ui.style())
            .fill(ui.visuals().extreme_bg_color)
            .show(ui, |ui| {
                ui.push_id(id, |ui| {
                    ui.set_min_width(ui.available_width());
                    ui.set_min_height(
                        rows as f32 * ui.text_style_height(&egui::TextStyle::Monospace),
                    );
                    ui.monospace(contenu);
                });
            });
    }

    fn bouton_action(&mut self, ui: &mut egui::Ui, label: &str, tip: &str, action: Action) {
        let resp = ui
            .add_sized([56.0, 30.0], egui::Button::new(label))
            .on_hover_text(tip);

        if resp.clicked() {
            match action {
                Action::ClearEntree => self.clear_entree(),
                Action::ClearResultats => self.clear_resultats(),
                Action::ResetTotal => self.reset_total(),
                Action::Backspace => {
                    self.entree.pop();
                }
            }
            self.focus_entree = true;
        }
    }

    fn bouton_insert(&mut self, ui: &mut egui::Ui, label: &str, to_insert: &str) {
        let resp = ui.add_sized([46.0, 28.0], egui::Button::new(label));
        if resp.clicked() {
            self.entree.push_str(to_insert);
            self.focus_entree = true;
        }
    }

    /* ------------------------ Pont vers le noyau ------------------------ */

    /// Convertit l'entrée via le noyau, puis dépose les notations dans l'état.
    fn convertit_via_noyau(&mut self) {
        let s = self.entree.trim().to_string();

        match lire_forme(&s) {
            Ok(forme) => {
                self.depose_forme(forme);
                self.pousse_historique(format!("{s} = {}", format_scientifique(&forme)));
            }
            Err(e) => self.set_erreur(e.to_string()),
        }
    }

    /// Applique une fonction à la valeur courante (ou à l'entrée si aucune
    /// conversion n'a encore eu lieu), résultat enchaînable.
    fn applique_fonction(&mut self, f: Fonction) {
        let operande = match self.courante {
            Some(forme) => forme,
            None => {
                let s = self.entree.trim().to_string();
                match lire_forme(&s) {
                    Ok(forme) => forme,
                    Err(e) => {
                        self.set_erreur(e.to_string());
                        return;
                    }
                }
            }
        };

        match f.applique(operande) {
            Ok(resultat) => {
                let avant = format_scientifique(&operande);
                self.depose_forme(resultat);
                self.pousse_historique(format!(
                    "{}({avant}) = {}",
                    f.nom(),
                    format_scientifique(&resultat)
                ));
            }
            Err(e) => self.set_erreur(e.to_string()),
        }
    }

    /// Prépare les trois notations et range la forme comme valeur courante.
    fn depose_forme(&mut self, forme: FormeStandard) {
        self.set_resultats(
            format_scientifique(&forme),
            format_ingenieur(&forme),
            forme.en_f64().to_string(),
            forme,
        );
    }
}

#[derive(Clone, Copy, Debug)]
enum Action {
    ClearEntree,
    ClearResultats,
    ResetTotal,
    Backspace,
}
