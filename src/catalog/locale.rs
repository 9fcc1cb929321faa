//! Language-code resolution for catalog paths.

use std::collections::HashSet;
use std::sync::LazyLock;

/// Compatibility remappings applied before canonical lookup. These
/// pairs are fixed; existing catalog trees depend on them.
const REMAPPED_CODES: [(&str, &str); 3] =
    [("pt-br", "pt_BR"), ("zh-tw", "zh_TW"), ("no", "nb")];

/// Locale identifiers accepted for catalog output, in canonical
/// `language[_Script][_REGION]` form.
/// Based on RFC 5646 <http://tools.ietf.org/html/rfc5646>
static KNOWN_LOCALES: LazyLock<HashSet<&'static str>> = LazyLock::new(|| {
    [
        "af", "af_ZA", "ar", "ar_AE", "ar_BH", "ar_DZ", "ar_EG", "ar_IQ", "ar_JO", "ar_KW",
        "ar_LB", "ar_LY", "ar_MA", "ar_OM", "ar_QA", "ar_SA", "ar_SY", "ar_TN", "ar_YE", "az",
        "az_AZ", "az_Cyrl_AZ", "be", "be_BY", "bg", "bg_BG", "bs_BA", "ca", "ca_ES", "cs",
        "cs_CZ", "cy", "cy_GB", "da", "da_DK", "de", "de_AT", "de_CH", "de_DE", "de_LI", "de_LU",
        "dv", "dv_MV", "el", "el_GR", "en", "en_AU", "en_BZ", "en_CA", "en_CB", "en_GB", "en_IE",
        "en_JM", "en_NZ", "en_PH", "en_TT", "en_US", "en_ZA", "en_ZW", "eo", "es", "es_AR",
        "es_BO", "es_CL", "es_CO", "es_CR", "es_DO", "es_EC", "es_ES", "es_GT", "es_HN", "es_MX",
        "es_NI", "es_PA", "es_PE", "es_PR", "es_PY", "es_SV", "es_UY", "es_VE", "et", "et_EE",
        "eu", "eu_ES", "fa", "fa_IR", "fi", "fi_FI", "fo", "fo_FO", "fr", "fr_BE", "fr_CA",
        "fr_CH", "fr_FR", "fr_LU", "fr_MC", "gl", "gl_ES", "gu", "gu_IN", "he", "he_IL", "hi",
        "hi_IN", "hr", "hr_BA", "hr_HR", "hu", "hu_HU", "hy", "hy_AM", "id", "id_ID", "is",
        "is_IS", "it", "it_CH", "it_IT", "ja", "ja_JP", "ka", "ka_GE", "kk", "kk_KZ", "kn",
        "kn_IN", "ko", "ko_KR", "kok", "kok_IN", "ky", "ky_KG", "lt", "lt_LT", "lv", "lv_LV",
        "mi", "mi_NZ", "mk", "mk_MK", "mn", "mn_MN", "mr", "mr_IN", "ms", "ms_BN", "ms_MY", "mt",
        "mt_MT", "nb", "nb_NO", "nl", "nl_BE", "nl_NL", "nn_NO", "ns", "ns_ZA", "pa", "pa_IN",
        "pl", "pl_PL", "ps", "ps_AR", "pt", "pt_BR", "pt_PT", "qu", "qu_BO", "qu_EC", "qu_PE",
        "ro", "ro_RO", "ru", "ru_RU", "sa", "sa_IN", "se", "se_FI", "se_NO", "se_SE", "sk",
        "sk_SK", "sl", "sl_SI", "sq", "sq_AL", "sr_BA", "sr_Cyrl_BA", "sr_SP", "sr_Cyrl_SP",
        "sv", "sv_FI", "sv_SE", "sw", "sw_KE", "syr", "syr_SY", "ta", "ta_IN", "te", "te_IN",
        "th", "th_TH", "tl", "tl_PH", "tn", "tn_ZA", "tr", "tr_TR", "tt", "tt_RU", "ts", "uk",
        "uk_UA", "ur", "ur_PK", "uz", "uz_UZ", "uz_Cyrl_UZ", "vi", "vi_VN", "xh", "xh_ZA", "zh",
        "zh_CN", "zh_HK", "zh_MO", "zh_SG", "zh_TW", "zu", "zu_ZA",
    ]
    .into_iter()
    .collect()
});

/// Resolves a dictionary language code to a canonical locale
/// identifier, e.g. `en-us` → `en_US`.
///
/// Returns `None` when the code cannot be mapped to a known locale;
/// the caller decides whether that skips the language or aborts.
#[must_use]
pub fn resolve(code: &str) -> Option<String> {
    let lowered = code.to_ascii_lowercase();
    if let Some((_, mapped)) = REMAPPED_CODES.iter().find(|(from, _)| *from == lowered) {
        return Some((*mapped).to_string());
    }

    let canonical = canonicalize(code);
    KNOWN_LOCALES.contains(canonical.as_str()).then_some(canonical)
}

/// Rewrites a code into `language[_Script][_REGION]` form: language
/// lowercased, two-letter region uppercased, four-letter script
/// title-cased, parts joined with underscores.
fn canonicalize(code: &str) -> String {
    code.split(['-', '_'])
        .enumerate()
        .map(|(index, part)| match (index, part.len()) {
            (0, _) => part.to_ascii_lowercase(),
            (_, 2) => part.to_ascii_uppercase(),
            (_, 4) => title_case(part),
            _ => part.to_string(),
        })
        .collect::<Vec<_>>()
        .join("_")
}

/// Uppercases the first character, lowercases the rest.
fn title_case(part: &str) -> String {
    let mut chars = part.chars();
    chars.next().map_or_else(String::new, |first| {
        first.to_ascii_uppercase().to_string() + &chars.as_str().to_ascii_lowercase()
    })
}
