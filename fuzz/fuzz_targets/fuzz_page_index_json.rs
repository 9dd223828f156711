#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(content) = std::str::from_utf8(data) {
        // Parsing, validating and rendering an arbitrary index never panics
        if let Ok(index) = sidenav::PageIndex::from_json_str(content) {
            let _ = index.validate();
            let mut session = sidenav::NavigationSession::with_defaults(index);
            session.navigate(sidenav::CurrentRoute::new("/"));
            let _ = session.visible_structure();
        }
    }
});
