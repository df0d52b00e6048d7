//! Static lookup tables for Bitrix enum values
//!
//! Project codes and lead-source ids are portal-specific enum values with no
//! label in the deal payload, so their labels are kept here.

use std::collections::HashMap;

use once_cell::sync::Lazy;

use crate::constants::UNKNOWN_SOURCE;

/// Project enum id (`UF_CRM_67FF84E2C8AB6`) to project name.
pub static PROJECT_NAMES: Lazy<HashMap<i64, &'static str>> = Lazy::new(|| {
    HashMap::from([
        (552, "17 Icon Bay"),
        (615, "52|42 Tower 1"),
        (616, "52|42 Tower 2"),
        (607, "Address Harbour Point Tower 1"),
        (608, "Address Harbour Point Tower 2"),
        (602, "Arabian Gate"),
        (569, "Arabian Ranches III - Bliss"),
        (4315, "Creek Beach Breeze - Tower 1"),
        (4316, "Creek Beach Breeze - Tower 2"),
        (4317, "Creek Beach Breeze - Tower 3"),
        (4331, "Springs 1"),
        (4332, "Springs 2"),
        (4334, "Liv Residence"),
        (4408, "Arabian Ranches III - Caya"),
        (4409, "Arabian Ranches III - Elie Saab"),
        (4335, "Manchester Tower"),
        (4410, "Arabian Ranches III - Elie Saab II"),
        (4435, "Azizi Riviera 1"),
        (4436, "Azizi Riviera 2"),
        (4437, "Azizi Riviera 3"),
        (4438, "Azizi Riviera 4"),
        (4439, "Azizi Riviera 5"),
        (4440, "Azizi Riviera 6"),
        (4441, "Azizi Riviera 7"),
        (4442, "Azizi Riviera 8"),
        (4443, "Azizi Riviera 9"),
        (570, "Arabian Ranches III - Joy"),
        (4444, "Azizi Riviera 10"),
        (4445, "Azizi Riviera 11"),
        (4446, "Azizi Riviera 12"),
        (4447, "Azizi Riviera 13"),
        (4448, "Azizi Riviera 14"),
        (4449, "Azizi Riviera 15"),
        (4450, "Azizi Riviera 16"),
        (4451, "Azizi Riviera 17"),
        (4452, "Azizi Riviera 18"),
        (4453, "Azizi Riviera 19"),
        (571, "Arabian Ranches III - June"),
        (4454, "Azizi Riviera 20"),
        (4455, "Azizi Riviera 21"),
        (4456, "Azizi Riviera 22"),
        (4457, "Azizi Riviera 23"),
        (4458, "Azizi Riviera 32"),
        (4459, "Azizi Riviera 33"),
        (4460, "Azizi Riviera 34"),
        (4461, "Azizi Riviera 35"),
        (4462, "Azizi Riviera 37"),
        (4463, "Azizi Riviera 38"),
        (572, "Arabian Ranches III - Ruba"),
        (4465, "Amna Tower"),
        (4466, "Harbour Gate Tower 1"),
        (4467, "Harbour Gate Tower 2"),
        (4468, "Upper Crest"),
        (4482, "The Alef Residences"),
        (4483, "Jumeirah Gate Tower 1"),
        (4484, "Jumeirah Gate Tower 2"),
        (4485, "THE ROYAL ATLANTIS RESORT & RESIDENCES"),
        (4486, "THE 8"),
        (4487, "THE PALM TOWER"),
        (573, "Arabian Ranches III - Spring"),
        (4488, "Emerald Palace Kempinski Hotel"),
        (4489, "BALQIS RESIDENCE 1"),
        (4490, "BALQIS RESIDENCE 2"),
        (4491, "BALQIS RESIDENCE 3"),
        (4492, "Bluewaters Residences 1"),
        (4493, "Bluewaters Residences 2"),
        (4494, "Bluewaters Residences 3"),
        (4495, "Bluewaters Residences 4"),
        (4496, "Bluewaters Residences 5"),
        (4497, "Bluewaters Residences 6"),
        (574, "Arabian Ranches III - Sun"),
        (4498, "Bluewaters Residences 7"),
        (4499, "Bluewaters Residences 8"),
        (4500, "Bluewaters Residences 9"),
        (4501, "Bluewaters Residences 10"),
        (4502, "CARIBBEAN"),
        (4503, "PACIFIC"),
        (4504, "SOUTHERN"),
        (4505, "ADRIATIC"),
        (4506, "AEGEAN"),
        (4507, "ATLANTIC"),
        (567, "Belgravia III A"),
        (4508, "BALTIC"),
        (4509, "Cherrywoods"),
        (4511, "Al Habtoor Tower"),
        (4515, "Forte"),
        (4516, "Burj Khalifa"),
        (4517, "Opera Grand"),
        (4518, "St. Regis"),
        (4519, "29 Burj Boulevard"),
        (4520, "Downtown Views"),
        (568, "Belgravia III B"),
        (4521, "The Address Dubai Mall"),
        (4522, "Imperial Avenue"),
        (4523, "Standpoint Tower"),
        (4524, "Address Fountain Views (we worked on tower 3 ONLY)"),
        (4525, "IL Primo"),
        (4526, "Boulevard Central Tower"),
        (4527, "Grande"),
        (4528, "Burj Al Nujoom"),
        (4529, "RP Heights"),
        (4530, "48 Burj Royale"),
        (580, "Bloom Heights A"),
        (4531, "Mon Reve"),
        (4532, "The Residences"),
        (4533, "Movenpick Hotel Apartments"),
        (4534, "The Lofts West"),
        (4535, "Damac Maison the Distinction"),
        (4536, "The Signature"),
        (4537, "Visa Residence"),
        (4538, "Burj Royale"),
        (4539, "DT1"),
        (4540, "Mada Residences"),
        (581, "Bloom Heights B"),
        (4541, "Claren Tower"),
        (4542, "Elite Downtown"),
        (4543, "Boulevard Crescent"),
        (605, "Blvd Heights T1"),
        (606, "Blvd Heights T2"),
        (553, "Burj Crown"),
        (609, "Creek Gate Tower 1"),
        (610, "Creek Gate Tower 2"),
        (611, "Creek Horizon Tower 1"),
        (612, "Creek Horizon Tower 2"),
        (613, "Creek Rise Tower 1"),
        (614, "Creek Rise Tower 2"),
        (557, "Continental Tower"),
        (617, "Damac Heights"),
        (556, "Platinum Residence"),
        (554, "Reva Residences"),
        (551, "The Grand"),
        (559, "Tiara Residence - Emerald North 1"),
        (626, "Tiara Residence - Aquamarine"),
        (627, "Tiara Residence - Diamond"),
        (628, "Tiara Residence - Ruby"),
        (629, "Tiara Residence - Sapphire"),
        (630, "Tiara Residence - Tanzanite"),
        (601, "Others"),
        (639, "Azizi Riviera"),
        (642, "Merano Tower"),
        (643, "The Scala Tower"),
        (644, "Paramount Tower Hotel & Residences"),
        (645, "Maple"),
        (646, "Maple 2"),
        (647, "Maple 3"),
        (648, "Club Villas"),
        (651, "Elan"),
        (652, "Aura"),
        (653, "Harmony"),
        (654, "Alaya"),
        (656, "Joya Blanca"),
        (658, "Boulevard Point"),
        (4306, "Pinnacle Tower"),
        (4307, "West Bay Tower"),
        (4308, "Marquise Square Tower"),
        (4309, "Binghatti Gate"),
        (4310, "Binghatti Jasmine"),
    ])
});

/// Lead source id (`SOURCE_ID`) to human-readable label.
pub static LEAD_SOURCES: Lazy<HashMap<&'static str, &'static str>> = Lazy::new(|| {
    HashMap::from([
        ("UC_BL71II", "SMS Marketing"),
        ("UC_BUT1P2", "Emailer"),
        ("UC_M5MP33", "Snapchat/Whatsapp"),
        ("UC_PLY23S", "Property Finder"),
        ("UC_LTULS9", "Bayut"),
        ("UC_B35FBN", "Dubizzle"),
        ("UC_HUNIS3", "TikTok"),
        ("UC_3UUGSB", "Snapchat"),
        ("UC_YYKE9B", "Google Ads"),
        ("UC_ZPFSTP", "E-Mail"),
        ("UC_02SXFQ", "Website"),
        ("8|WZ_WHATSAPP_CB63BAB86767316147F387473D9D56248", "WAZZUP: WhatsApp - Open Channel 5"),
        ("1|WZ_WHATSAPP_CB63BAB86767316147F387473D9D56248", "WAZZUP: WhatsApp - Gi Properties Channel"),
        ("3|WZ_WHATSAPP_CB63BAB86767316147F387473D9D56248", "WAZZUP: WhatsApp - GI Properties FB Chats"),
        ("CALL", "Call"),
        ("WEBFORM", "CRM form"),
        ("STORE", "Personal"),
        ("UC_L31Q25", "Property Finder Call"),
        ("RC_GENERATOR", "Property finder Emails"),
        ("CALLBACK", "Property finder WhatsApp"),
        ("UC_V2L4X6", "Bayut Calls"),
        ("UC_SP0A92", "Bayut Emails"),
        ("UC_DPPLAR", "Bayut WhatsApp"),
        ("UC_C75HXX", "Dubizzle Calls"),
        ("UC_67115U", "Dubizzle Emails"),
        ("UC_NUP3WI", "Dubizzle WhatsApp"),
        ("UC_2FWM9X", "Facebook"),
        ("UC_I3JB89", "Instagram Direct - Gi Properties Channel"),
        ("UC_A8MJEL", "Call back"),
        ("UC_1X71U2", "Facebook - Gi Properties Channel"),
        ("UC_S7U2JP", "Al Habtoor Tower"),
        ("UC_CT2ZTA", "Canal Heights EU FEB 2024"),
        ("UC_P08WQA", "Dubai Creek Russia"),
        ("UC_12QAUE", "Dubai Creek Harbour - EUR"),
        ("UC_1TBWA9", "Dubai Creek Harbour - USA"),
        ("UC_TJUFIE", "Dubai Creek Harbour"),
        ("UC_GCMV2N", "D1 West at MBR City SEA"),
        ("UC_8RWO8P", "D1 West at MBR City US"),
        ("UC_BR8SQF", "The Address RAK - RU"),
        ("UC_MFL3ZH", "The Acres UAE EN"),
        ("UC_LX65AA", "The Address RAK - EUR"),
        ("UC_SXUEMO", "The Address RAK - US/Canada"),
        ("UC_9M2ID6", "The Valley Emaar AQ"),
        ("UC_PE86CN", "Masaar - AR - V6"),
        ("UC_SQETC6", "Masaar English - UAE"),
        ("UC_2IFC98", "Masaar English"),
        ("UC_CJVCAK", "Masaar Arabic AQ"),
        ("UC_ZX07T8", "Masaar AE DEC 26"),
        ("UC_XCF52L", "Masaar EN DEC 12"),
        ("UC_EW2DW0", "Masaar-UAE-Oct-2023"),
        ("UC_49TGUS", "Mercedes-Benz Places by Binghatti Updated"),
        ("UC_BHSM94", "Mercedes-Benz Places - Meta"),
        ("UC_4AW5NA", "Eleganz EU"),
        ("UC_N1IIP0", "Eleganz GCC"),
        ("UC_RY7N93", "Skyhills Residences GCC"),
        ("UC_L8CYLX", "Empire Suites Jan 26 2024"),
        ("UC_24CGIP", "Park Lane Dubai Hills - EUR"),
        ("UC_GW550Q", "Azizi Venice EU"),
        ("UC_1HJBDZ", "Azizi Venice 220124 GCC"),
        ("UC_9SE51I", "Marriott Residences EU"),
        ("UC_EP3L4C", "Damac 1% DEC 15 FORM"),
        ("UC_C8UW8Y", "Weybridge Gardens EU"),
        ("UC_IH305L", "Marriot Residences GCC"),
        ("UC_Z1PFFT", "Jouri Hills EU 190124"),
        ("UC_RHDG91", "JVC Project Campaign UAE 190124"),
        ("UC_F51L1G", "JVC Projects EU 190124"),
        ("UC_G1IREX", "Verona Dmac Hills 2 UAE 190124"),
        ("UC_NHTJ91", "Verona Damac Hills 2 FB Form 191024"),
        ("UC_8R96G3", "Expo City Dubai"),
        ("UC_0UHO49", "Samana Barari View"),
        ("UC_3E1KGT", "Heimat"),
        ("UC_WHMLYC", "Sobha Hartland"),
        ("UC_56CG14", "Haven By Aldar-Arabic"),
        ("UC_CP4DXH", "Address By Emaar"),
        ("UC_B6CFH6", "Arada Open House Event"),
        ("UC_7WWPET", "FB Masaar English"),
        ("UC_RMA0LV", "Sustainable City"),
        ("UC_CDJY52", "Damac Park Greens"),
        ("UC_J3BGKL", "MB Places EU Arabic"),
        ("UC_AAOPC6", "Hayyan - Arabic"),
        ("UC_IK25GN", "Hayyan - English"),
        ("UC_GGVMGE", "Sobha Reserve"),
        ("UC_INHDO1", "Damac Casa"),
        ("UC_OW5BP1", "Meraas Central Park"),
        ("UC_5SEWX5", "Socio-DHE"),
        ("UC_L8LIX7", "Nshama Aria"),
        ("UC_9BR9LW", "Porto Playa"),
        ("UC_88EGID", "Samana Skyros-Eng"),
        ("UC_OH55JR", "Anantara Sharjah"),
        ("UC_XF3Y91", "Owners Data"),
        ("UC_RW3CB8", "Tiktok LP"),
        ("UC_SPCPAN", "Snapchat LP"),
        ("UC_D0P9AF", "Facebook LP"),
        ("UC_3RXYOB", "Youtube LP"),
        ("UC_HJKP46", "Speakol"),
        ("UC_4B50M9", "Linked-In"),
        ("UC_DKCHV2", "MailChimp"),
        ("WZ1fcfc891-0009-47fb-b358-809c9c42f0da", "Whatsapp 971589982713"),
        ("WZ63d561e3-2b6a-43d8-8df8-01cfe84245e3", "Whatsapp 971507133886"),
        ("UC_S8JC1V", "Import"),
        ("UC_7I1S2L", "AI"),
    ])
});

/// Project name for a project code; unknown or missing codes map to `""`.
#[must_use]
pub fn project_name(code: Option<i64>) -> &'static str {
    code.and_then(|code| PROJECT_NAMES.get(&code).copied()).unwrap_or_default()
}

/// Lead source label; unknown or missing ids map to `"Unknown Source"`.
#[must_use]
pub fn lead_source_label(source_id: Option<&str>) -> &'static str {
    source_id.and_then(|id| LEAD_SOURCES.get(id).copied()).unwrap_or(UNKNOWN_SOURCE)
}
