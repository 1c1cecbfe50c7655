#[cfg(target_family = "wasm")]
mod platform {
    use sapp_jsutils::JsObject;

    mod imports {
        use sapp_jsutils::JsObject;

        unsafe extern "C" {
            pub fn app_done_loading();
            pub fn panic_screen(msg: JsObject);
        }
    }

    pub fn done_loading() {
        unsafe { imports::app_done_loading() }
    }

    pub fn panic_screen(msg: &str) {
        unsafe {
            imports::panic_screen(JsObject::string(msg));
        }
    }
}

#[cfg(not(target_family = "wasm"))]
mod platform {
    pub fn done_loading() { /* Nothing */
    }

    pub fn panic_screen(msg: &str) {
        eprintln!("{msg}");
    }
}

pub use platform::*;
