//! Label Normalization
//!
//! Rewrites fully-qualified trait paths inside symbolic function labels down
//! to the base trait name, so that labels produced by different tools can be
//! compared. `<T as failure::as_fail::AsFail>::as_fail` becomes
//! `<T as AsFail>::as_fail`.

/// Shorten one trait-path fragment (the text following an `" as "` marker).
///
/// Everything up to the first `>` is the trait path; only its last `::`
/// component survives. The remainder of the fragment, `>` included, is
/// reattached unmodified.
fn shorten_trait_path(fragment: &str) -> String {
    let mut chunks = fragment.split('>');
    // split always yields at least one chunk
    let head = chunks.next().unwrap_or(fragment);
    let basename = head.rsplit("::").next().unwrap_or(head);

    let mut out = String::with_capacity(fragment.len());
    out.push_str(basename);
    for rest in chunks {
        out.push('>');
        out.push_str(rest);
    }
    out
}

/// Normalize a symbolic function label by stripping the module path off every
/// fully-qualified trait name that follows an `" as "` cast marker.
///
/// Labels without `" as "` are returned unchanged. The rewrite is purely
/// textual and idempotent; no validation of the label is attempted.
pub fn simplify_trait_paths(label: &str) -> String {
    let parts: Vec<&str> = label.split(" as ").collect();
    if parts.len() == 1 {
        return label.to_string();
    }

    parts
        .into_iter()
        .enumerate()
        .map(|(i, segment)| {
            // Even segments precede the marker and pass through verbatim;
            // odd segments are the trait paths we shorten.
            if i % 2 == 0 {
                segment.to_string()
            } else {
                shorten_trait_path(segment)
            }
        })
        .collect::<Vec<String>>()
        .join(" as ")
}
