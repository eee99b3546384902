//! Test utilities for text extraction
//!
//! Sample documents shaped like the real sources, shared by the extractor
//! tests.

mod wiki_map_tests;

/// Article excerpt with one map section and noise around it
pub fn sample_map_article() -> &'static str {
    "== Carte ==\n\
     {{G|Lot|44.9|1.1|Hors carte|sans toponyme}}\n\
     {{Début de carte}}\n\
     {{G|Lot|44.61|1.72|Dolmen du Pech|dolmen sans toponyme}}\n\
     {{G|Lot|44.70|1.80|{{Dolmen de Roques}}|sans toponyme}}\n\
     texte libre\n\
     {{Fin de carte}}\n\
     {{G|Lot|44.8|1.9|Après carte|sans toponyme}}\n"
}

/// Article excerpt with one list table
///
/// Lines: 1 intro, 2 table start, 3 header, 4/6/8 row starts, 10 table end.
pub fn sample_list_article() -> &'static str {
    "Liste des dolmens du Lot.\n\
     {| class=\"wikitable sortable\"\n\
     ! Nom !! Commune !! Lieu !! Protection !! Coordonnées\n\
     |-\n\
     | [[Dolmen de la Pierre Martine]] || [[Livernon]] || Causse || {{MH}}<ref>Classé en 1889</ref> || {{coord|44.633|1.847}}\n\
     |-\n\
     | Dolmen du Pech || Gramat || || || 44.7, 1.72<br>Second : 44.71, 1.73\n\
     |-\n\
     | Dolmen perdu || Gramat || || || inconnu\n\
     |}\n"
}

/// Inventory excerpt: three complete entries and one without coordinates
pub fn sample_inventory() -> &'static str {
    "INVENTAIRE ALPHABÉTIQUE\n\
     ABOIS, Perte de l' - Commune d'Assier\n\
     564,50 - 263,47 - 310m (IGN 2138 E)\n\
     Perte active au fond d'une doline.\n\
     Plan 12.\n\
     BANCAREL, Igue de - Commune de Gramat\n\
     577,83 - 246,12 - 340m (IGN 2237 O)\n\
     Puits de 20 m.\n\
     42\n\
     CAZELLE, Grotte de la - Grotte du Loup - Commune de Rocamadour\n\
     entrée haute : 600,00 - 200,00 - 250m\n\
     entrée basse : 600,10 - 200,20 - 240m ) (IGN 2137 E)\n\
     Deux entrées reliées.\n\
     DUPONT, Gouffre - Commune de Reilhac\n\
     (IGN 2237 O)\n\
     Texte sans coordonnées.\n"
}
