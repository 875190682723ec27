use cfg_if::cfg_if;

#[macro_export]
macro_rules! debug {
    ($($arg:tt)*) => {{
        $crate::debug(&format!($($arg)*));
    }}
}

#[macro_export]
macro_rules! err {
    ($($arg:tt)*) => {{
        $crate::err(&format!($($arg)*));
    }}
}

#[macro_export]
macro_rules! log {
    ($($arg:tt)*) => {{
        $crate::log(&format!($($arg)*));
    }}
}

#[macro_export]
macro_rules! warning {
    ($($arg:tt)*) => {{
        $crate::warning(&format!($($arg)*));
    }}
}

cfg_if! {
    if #[cfg(target_arch = "wasm32")] {
        use wasm_bindgen::prelude::*;

        #[wasm_bindgen]
        extern "C" {
            #[wasm_bindgen(js_namespace = console)]
            pub fn debug(s: &str);

            #[wasm_bindgen(js_namespace = console, js_name = error)]
            pub fn err(s: &str);

            #[wasm_bindgen(js_namespace = console)]
            pub fn log(s: &str);

            #[wasm_bindgen(js_namespace = console, js_name = warn)]
            pub fn warning(s: &str);
        }
    } else {
        // outside the browser every message goes through the `log` facade under the "tiling" target
        pub fn debug(s: &str) {
            ::log::debug!(target: "tiling", "{}", s);
        }

        pub fn err(s: &str) {
            ::log::error!(target: "tiling", "{}", s);
        }

        pub fn log(s: &str) {
            ::log::info!(target: "tiling", "{}", s);
        }

        pub fn warning(s: &str) {
            ::log::warn!(target: "tiling", "{}", s);
        }
    }
}
