// src/main.rs
//
// Forme standard — point d'entrée NATIF + WEB (WASM)
// --------------------------------------------------
// But:
// - NATIF (Linux/Windows/macOS) : eframe::run_native + NativeOptions
// - WEB  (wasm32)              : eframe::WebRunner + WebOptions + <canvas>
//
// Côté WEB (WASM) : l'index.html doit contenir un canvas :
//   <canvas id="the_canvas_id"></canvas>
//
// IMPORTANT (structure projet):
// - `impl eframe::App for AppForme` vit dans src/app.rs
// - Ici: point d'entrée seulement (natif + web)

#![cfg_attr(target_arch = "wasm32", allow(unused_imports))]

use eframe::egui;

use forme_standard::app::AppForme;

/// Titre unique (natif + web).
const TITRE_APP: &str = "Forme standard";

/* ------------------------ Entrée NATIF (PC) ------------------------ */

#[cfg(not(target_arch = "wasm32"))]
fn main() -> eframe::Result<()> {
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title(TITRE_APP)
            .with_inner_size([460.0, 640.0])
            .with_min_inner_size([380.0, 520.0]),
        ..Default::default()
    };

    eframe::run_native(
        TITRE_APP,
        options,
        Box::new(|_cc| Ok(Box::<AppForme>::default())),
    )
}

/* ------------------------ Entrée WEB (WASM) ------------------------ */

#[cfg(target_arch = "wasm32")]
fn main() {
    // En wasm32, le démarrage réel passe par `start()` (wasm_bindgen).
    // On laisse main() vide pour rester clair.
}

#[cfg(target_arch = "wasm32")]
mod web {
    use super::{AppForme, TITRE_APP};

    use wasm_bindgen::JsCast;
    use web_sys::{window, HtmlCanvasElement};

    /// ID du canvas attendu dans index.html.
    const CANVAS_ID: &str = "the_canvas_id";

    /// Point d'entrée automatique au chargement de la page.
    /// - Fixe le titre de l'onglet (document.title)
    /// - Récupère le <canvas id="the_canvas_id">
    /// - Démarre eframe WebRunner dessus
    #[wasm_bindgen::prelude::wasm_bindgen(start)]
    pub async fn start() -> Result<(), wasm_bindgen::JsValue> {
        // 1) window/document
        let w = window().ok_or_else(|| js_err("window() indisponible"))?;
        let d = w
            .document()
            .ok_or_else(|| js_err("document() indisponible"))?;

        // 1.5) Titre onglet
        d.set_title(TITRE_APP);

        // 2) element by id
        let el = d
            .get_element_by_id(CANVAS_ID)
            .ok_or_else(|| js_err("canvas introuvable (id incorrect dans index.html)"))?;

        // 3) cast -> HtmlCanvasElement
        let canvas: HtmlCanvasElement = el
            .dyn_into::<HtmlCanvasElement>()
            .map_err(|_| js_err("l'élément trouvé n'est pas un <canvas>"))?;

        // 4) run web
        let web_options = eframe::WebOptions::default();

        eframe::WebRunner::new()
            .start(
                canvas,
                web_options,
                Box::new(|_cc| Ok(Box::<AppForme>::default())),
            )
            .await
    }

    fn js_err(msg: &str) -> wasm_bindgen::JsValue {
        wasm_bindgen::JsValue::from_str(msg)
    }
}
