//! Built-in country dataset.
//!
//! Coordinates are approximate geographic centroids; `Territory` covers
//! dependencies and partially recognized regions.

#![allow(clippy::unreadable_literal)]

use super::Continent::{Africa, Americas, Asia, Europe, Oceania};
use super::CountryType::{Sovereign, Territory};
use super::Difficulty::{Easy, Hard, Normal};
use super::{Continent, Country, CountryType, Difficulty};

/// Shorthand constructor keeping the table one entry per line.
#[allow(clippy::too_many_arguments)]
const fn c(
    code: &'static str,
    name: &'static str,
    continent: Continent,
    kind: CountryType,
    difficulty: Difficulty,
    capital: &'static str,
    lat: f64,
    lng: f64,
) -> Country {
    Country::new(code, name, continent, kind, difficulty, capital, lat, lng)
}

/// Every country in the game: sovereign states first, then territories.
pub static COUNTRIES: &[Country] = &[
    c("af", "Afghanistan", Asia, Sovereign, Normal, "Kabul", 33.93911, 67.709953),
    c("al", "Albania", Europe, Sovereign, Normal, "Tirana", 41.153332, 20.168331),
    c("dz", "Algeria", Africa, Sovereign, Normal, "Algiers", 28.033886, 1.659626),
    c("ad", "Andorra", Europe, Sovereign, Hard, "Andorra la Vella", 42.546245, 1.601554),
    c("ao", "Angola", Africa, Sovereign, Normal, "Luanda", -11.202692, 17.873887),
    c("ag", "Antigua and Barbuda", Americas, Sovereign, Hard, "Saint John's", 17.060816, -61.796428),
    c("ar", "Argentina", Americas, Sovereign, Easy, "Buenos Aires", -38.416097, -63.616672),
    c("am", "Armenia", Asia, Sovereign, Normal, "Yerevan", 40.069099, 45.038189),
    c("au", "Australia", Oceania, Sovereign, Easy, "Canberra", -25.274398, 133.775136),
    c("at", "Austria", Europe, Sovereign, Normal, "Vienna", 47.516231, 14.550072),
    c("az", "Azerbaijan", Asia, Sovereign, Normal, "Baku", 40.143105, 47.576927),
    c("bs", "Bahamas", Americas, Sovereign, Hard, "Nassau", 25.03428, -77.39628),
    c("bh", "Bahrain", Asia, Sovereign, Hard, "Manama", 25.930414, 50.637772),
    c("bd", "Bangladesh", Asia, Sovereign, Normal, "Dhaka", 23.684994, 90.356331),
    c("bb", "Barbados", Americas, Sovereign, Hard, "Bridgetown", 13.193887, -59.543198),
    c("by", "Belarus", Europe, Sovereign, Normal, "Minsk", 53.709807, 27.953389),
    c("be", "Belgium", Europe, Sovereign, Normal, "Brussels", 50.503887, 4.469936),
    c("bz", "Belize", Americas, Sovereign, Hard, "Belmopan", 17.189877, -88.49765),
    c("bj", "Benin", Africa, Sovereign, Hard, "Porto-Novo", 9.30769, 2.315834),
    c("bt", "Bhutan", Asia, Sovereign, Hard, "Thimphu", 27.514162, 90.433601),
    c("bo", "Bolivia", Americas, Sovereign, Normal, "Sucre", -16.290154, -63.588653),
    c("ba", "Bosnia and Herzegovina", Europe, Sovereign, Normal, "Sarajevo", 43.915886, 17.679076),
    c("bw", "Botswana", Africa, Sovereign, Normal, "Gaborone", -22.328474, 24.684866),
    c("br", "Brazil", Americas, Sovereign, Easy, "Brasília", -14.235004, -51.92528),
    c("bn", "Brunei", Asia, Sovereign, Hard, "Bandar Seri Begawan", 4.535277, 114.727669),
    c("bg", "Bulgaria", Europe, Sovereign, Normal, "Sofia", 42.733883, 25.48583),
    c("bf", "Burkina Faso", Africa, Sovereign, Hard, "Ouagadougou", 12.238333, -1.561593),
    c("bi", "Burundi", Africa, Sovereign, Hard, "Gitega", -3.373056, 29.918886),
    c("cv", "Cabo Verde", Africa, Sovereign, Hard, "Praia", 16.002082, -24.013197),
    c("kh", "Cambodia", Asia, Sovereign, Normal, "Phnom Penh", 12.565679, 104.990963),
    c("cm", "Cameroon", Africa, Sovereign, Normal, "Yaoundé", 7.369722, 12.354722),
    c("ca", "Canada", Americas, Sovereign, Easy, "Ottawa", 56.130366, -106.346771),
    c("cf", "Central African Republic", Africa, Sovereign, Hard, "Bangui", 6.611111, 20.939444),
    c("td", "Chad", Africa, Sovereign, Normal, "N'Djamena", 15.454166, 18.732207),
    c("cl", "Chile", Americas, Sovereign, Easy, "Santiago", -35.675147, -71.542969),
    c("cn", "China", Asia, Sovereign, Easy, "Beijing", 35.86166, 104.195397),
    c("co", "Colombia", Americas, Sovereign, Normal, "Bogotá", 4.570868, -74.297333),
    c("km", "Comoros", Africa, Sovereign, Hard, "Moroni", -11.875001, 43.872219),
    c("cg", "Congo", Africa, Sovereign, Hard, "Brazzaville", -0.228021, 15.827659),
    c("cd", "DR Congo", Africa, Sovereign, Normal, "Kinshasa", -4.038333, 21.758664),
    c("cr", "Costa Rica", Americas, Sovereign, Normal, "San José", 9.748917, -83.753428),
    c("ci", "Côte d'Ivoire", Africa, Sovereign, Normal, "Yamoussoukro", 7.539989, -5.54708),
    c("hr", "Croatia", Europe, Sovereign, Normal, "Zagreb", 45.1, 15.2),
    c("cu", "Cuba", Americas, Sovereign, Normal, "Havana", 21.521757, -77.781167),
    c("cy", "Cyprus", Europe, Sovereign, Normal, "Nicosia", 35.126413, 33.429859),
    c("cz", "Czechia", Europe, Sovereign, Normal, "Prague", 49.817492, 15.472962),
    c("dk", "Denmark", Europe, Sovereign, Normal, "Copenhagen", 56.26392, 9.501785),
    c("dj", "Djibouti", Africa, Sovereign, Hard, "Djibouti", 11.825138, 42.590275),
    c("dm", "Dominica", Americas, Sovereign, Hard, "Roseau", 15.414999, -61.370976),
    c("do", "Dominican Republic", Americas, Sovereign, Normal, "Santo Domingo", 18.735693, -70.162651),
    c("ec", "Ecuador", Americas, Sovereign, Normal, "Quito", -1.831239, -78.183406),
    c("eg", "Egypt", Africa, Sovereign, Easy, "Cairo", 26.820553, 30.802498),
    c("sv", "El Salvador", Americas, Sovereign, Normal, "San Salvador", 13.794185, -88.89653),
    c("gq", "Equatorial Guinea", Africa, Sovereign, Hard, "Malabo", 1.650801, 10.267895),
    c("er", "Eritrea", Africa, Sovereign, Hard, "Asmara", 15.179384, 39.782334),
    c("ee", "Estonia", Europe, Sovereign, Normal, "Tallinn", 58.595272, 25.013607),
    c("sz", "Eswatini", Africa, Sovereign, Hard, "Mbabane", -26.522503, 31.465866),
    c("et", "Ethiopia", Africa, Sovereign, Normal, "Addis Ababa", 9.145, 40.489673),
    c("fj", "Fiji", Oceania, Sovereign, Normal, "Suva", -16.578193, 179.414413),
    c("fi", "Finland", Europe, Sovereign, Normal, "Helsinki", 61.92411, 25.748151),
    c("fr", "France", Europe, Sovereign, Easy, "Paris", 46.227638, 2.213749),
    c("ga", "Gabon", Africa, Sovereign, Hard, "Libreville", -0.803689, 11.609444),
    c("gm", "Gambia", Africa, Sovereign, Hard, "Banjul", 13.443182, -15.310139),
    c("ge", "Georgia", Asia, Sovereign, Normal, "Tbilisi", 42.315407, 43.356892),
    c("de", "Germany", Europe, Sovereign, Easy, "Berlin", 51.165691, 10.451526),
    c("gh", "Ghana", Africa, Sovereign, Normal, "Accra", 7.946527, -1.023194),
    c("gr", "Greece", Europe, Sovereign, Easy, "Athens", 39.074208, 21.824312),
    c("gd", "Grenada", Americas, Sovereign, Hard, "Saint George's", 12.262776, -61.604171),
    c("gt", "Guatemala", Americas, Sovereign, Normal, "Guatemala City", 15.783471, -90.230759),
    c("gn", "Guinea", Africa, Sovereign, Hard, "Conakry", 9.945587, -9.696645),
    c("gw", "Guinea-Bissau", Africa, Sovereign, Hard, "Bissau", 11.803749, -15.180413),
    c("gy", "Guyana", Americas, Sovereign, Hard, "Georgetown", 4.860416, -58.93018),
    c("ht", "Haiti", Americas, Sovereign, Normal, "Port-au-Prince", 18.971187, -72.285215),
    c("hn", "Honduras", Americas, Sovereign, Normal, "Tegucigalpa", 15.199999, -86.241905),
    c("hu", "Hungary", Europe, Sovereign, Normal, "Budapest", 47.162494, 19.503304),
    c("is", "Iceland", Europe, Sovereign, Easy, "Reykjavík", 64.963051, -19.020835),
    c("in", "India", Asia, Sovereign, Easy, "New Delhi", 20.593684, 78.96288),
    c("id", "Indonesia", Asia, Sovereign, Easy, "Jakarta", -0.789275, 113.921327),
    c("ir", "Iran", Asia, Sovereign, Normal, "Tehran", 32.427908, 53.688046),
    c("iq", "Iraq", Asia, Sovereign, Normal, "Baghdad", 33.223191, 43.679291),
    c("ie", "Ireland", Europe, Sovereign, Easy, "Dublin", 53.41291, -8.24389),
    c("il", "Israel", Asia, Sovereign, Normal, "Jerusalem", 31.046051, 34.851612),
    c("it", "Italy", Europe, Sovereign, Easy, "Rome", 41.87194, 12.56738),
    c("jm", "Jamaica", Americas, Sovereign, Normal, "Kingston", 18.109581, -77.297508),
    c("jp", "Japan", Asia, Sovereign, Easy, "Tokyo", 36.204824, 138.252924),
    c("jo", "Jordan", Asia, Sovereign, Normal, "Amman", 30.585164, 36.238414),
    c("kz", "Kazakhstan", Asia, Sovereign, Normal, "Astana", 48.019573, 66.923684),
    c("ke", "Kenya", Africa, Sovereign, Normal, "Nairobi", -0.023559, 37.906193),
    c("ki", "Kiribati", Oceania, Sovereign, Hard, "Tarawa", -3.370417, -168.734039),
    c("kw", "Kuwait", Asia, Sovereign, Normal, "Kuwait City", 29.31166, 47.481766),
    c("kg", "Kyrgyzstan", Asia, Sovereign, Hard, "Bishkek", 41.20438, 74.766098),
    c("la", "Laos", Asia, Sovereign, Normal, "Vientiane", 19.85627, 102.495496),
    c("lv", "Latvia", Europe, Sovereign, Normal, "Riga", 56.879635, 24.603189),
    c("lb", "Lebanon", Asia, Sovereign, Normal, "Beirut", 33.854721, 35.862285),
    c("ls", "Lesotho", Africa, Sovereign, Hard, "Maseru", -29.609988, 28.233608),
    c("lr", "Liberia", Africa, Sovereign, Hard, "Monrovia", 6.428055, -9.429499),
    c("ly", "Libya", Africa, Sovereign, Normal, "Tripoli", 26.3351, 17.228331),
    c("li", "Liechtenstein", Europe, Sovereign, Hard, "Vaduz", 47.166, 9.555373),
    c("lt", "Lithuania", Europe, Sovereign, Normal, "Vilnius", 55.169438, 23.881275),
    c("lu", "Luxembourg", Europe, Sovereign, Hard, "Luxembourg", 49.815273, 6.129583),
    c("mg", "Madagascar", Africa, Sovereign, Easy, "Antananarivo", -18.766947, 46.869107),
    c("mw", "Malawi", Africa, Sovereign, Hard, "Lilongwe", -13.254308, 34.301525),
    c("my", "Malaysia", Asia, Sovereign, Normal, "Kuala Lumpur", 4.210484, 101.975766),
    c("mv", "Maldives", Asia, Sovereign, Hard, "Malé", 3.202778, 73.22068),
    c("ml", "Mali", Africa, Sovereign, Normal, "Bamako", 17.570692, -3.996166),
    c("mt", "Malta", Europe, Sovereign, Hard, "Valletta", 35.937496, 14.375416),
    c("mh", "Marshall Islands", Oceania, Sovereign, Hard, "Majuro", 7.131474, 171.184478),
    c("mr", "Mauritania", Africa, Sovereign, Hard, "Nouakchott", 21.00789, -10.940835),
    c("mu", "Mauritius", Africa, Sovereign, Hard, "Port Louis", -20.348404, 57.552152),
    c("mx", "Mexico", Americas, Sovereign, Easy, "Mexico City", 23.634501, -102.552784),
    c("fm", "Micronesia", Oceania, Sovereign, Hard, "Palikir", 7.425554, 150.550812),
    c("md", "Moldova", Europe, Sovereign, Normal, "Chișinău", 47.411631, 28.369885),
    c("mc", "Monaco", Europe, Sovereign, Hard, "Monaco", 43.750298, 7.412841),
    c("mn", "Mongolia", Asia, Sovereign, Normal, "Ulaanbaatar", 46.862496, 103.846656),
    c("me", "Montenegro", Europe, Sovereign, Hard, "Podgorica", 42.708678, 19.37439),
    c("ma", "Morocco", Africa, Sovereign, Normal, "Rabat", 31.791702, -7.09262),
    c("mz", "Mozambique", Africa, Sovereign, Normal, "Maputo", -18.665695, 35.529562),
    c("mm", "Myanmar", Asia, Sovereign, Normal, "Naypyidaw", 21.913965, 95.956223),
    c("na", "Namibia", Africa, Sovereign, Normal, "Windhoek", -22.95764, 18.49041),
    c("nr", "Nauru", Oceania, Sovereign, Hard, "Yaren", -0.522778, 166.931503),
    c("np", "Nepal", Asia, Sovereign, Normal, "Kathmandu", 28.394857, 84.124008),
    c("nl", "Netherlands", Europe, Sovereign, Normal, "Amsterdam", 52.132633, 5.291266),
    c("nz", "New Zealand", Oceania, Sovereign, Easy, "Wellington", -40.900557, 174.885971),
    c("ni", "Nicaragua", Americas, Sovereign, Normal, "Managua", 12.865416, -85.207229),
    c("ne", "Niger", Africa, Sovereign, Normal, "Niamey", 17.607789, 8.081666),
    c("ng", "Nigeria", Africa, Sovereign, Normal, "Abuja", 9.081999, 8.675277),
    c("kp", "North Korea", Asia, Sovereign, Normal, "Pyongyang", 40.339852, 127.510093),
    c("mk", "North Macedonia", Europe, Sovereign, Hard, "Skopje", 41.608635, 21.745275),
    c("no", "Norway", Europe, Sovereign, Easy, "Oslo", 60.472024, 8.468946),
    c("om", "Oman", Asia, Sovereign, Normal, "Muscat", 21.512583, 55.923255),
    c("pk", "Pakistan", Asia, Sovereign, Normal, "Islamabad", 30.375321, 69.345116),
    c("pw", "Palau", Oceania, Sovereign, Hard, "Ngerulmud", 7.51498, 134.58252),
    c("pa", "Panama", Americas, Sovereign, Normal, "Panama City", 8.537981, -80.782127),
    c("pg", "Papua New Guinea", Oceania, Sovereign, Normal, "Port Moresby", -6.314993, 143.95555),
    c("py", "Paraguay", Americas, Sovereign, Normal, "Asunción", -23.442503, -58.443832),
    c("pe", "Peru", Americas, Sovereign, Normal, "Lima", -9.189967, -75.015152),
    c("ph", "Philippines", Asia, Sovereign, Normal, "Manila", 12.879721, 121.774017),
    c("pl", "Poland", Europe, Sovereign, Normal, "Warsaw", 51.919438, 19.145136),
    c("pt", "Portugal", Europe, Sovereign, Easy, "Lisbon", 39.399872, -8.224454),
    c("qa", "Qatar", Asia, Sovereign, Normal, "Doha", 25.354826, 51.183884),
    c("ro", "Romania", Europe, Sovereign, Normal, "Bucharest", 45.943161, 24.96676),
    c("ru", "Russia", Europe, Sovereign, Easy, "Moscow", 61.52401, 105.318756),
    c("rw", "Rwanda", Africa, Sovereign, Hard, "Kigali", -1.940278, 29.873888),
    c("kn", "Saint Kitts and Nevis", Americas, Sovereign, Hard, "Basseterre", 17.357822, -62.782998),
    c("lc", "Saint Lucia", Americas, Sovereign, Hard, "Castries", 13.909444, -60.978893),
    c("vc", "Saint Vincent and the Grenadines", Americas, Sovereign, Hard, "Kingstown", 12.984305, -61.287228),
    c("ws", "Samoa", Oceania, Sovereign, Hard, "Apia", -13.759029, -172.104629),
    c("sm", "San Marino", Europe, Sovereign, Hard, "San Marino", 43.94236, 12.457777),
    c("st", "Sao Tome and Principe", Africa, Sovereign, Hard, "São Tomé", 0.18636, 6.613081),
    c("sa", "Saudi Arabia", Asia, Sovereign, Easy, "Riyadh", 23.885942, 45.079162),
    c("sn", "Senegal", Africa, Sovereign, Normal, "Dakar", 14.497401, -14.452362),
    c("rs", "Serbia", Europe, Sovereign, Normal, "Belgrade", 44.016521, 21.005859),
    c("sc", "Seychelles", Africa, Sovereign, Hard, "Victoria", -4.679574, 55.491977),
    c("sl", "Sierra Leone", Africa, Sovereign, Hard, "Freetown", 8.460555, -11.779889),
    c("sg", "Singapore", Asia, Sovereign, Normal, "Singapore", 1.352083, 103.819836),
    c("sk", "Slovakia", Europe, Sovereign, Normal, "Bratislava", 48.669026, 19.699024),
    c("si", "Slovenia", Europe, Sovereign, Normal, "Ljubljana", 46.151241, 14.995463),
    c("sb", "Solomon Islands", Oceania, Sovereign, Hard, "Honiara", -9.64571, 160.156194),
    c("so", "Somalia", Africa, Sovereign, Normal, "Mogadishu", 5.152149, 46.199616),
    c("za", "South Africa", Africa, Sovereign, Easy, "Pretoria", -30.559482, 22.937506),
    c("kr", "South Korea", Asia, Sovereign, Easy, "Seoul", 35.907757, 127.766922),
    c("ss", "South Sudan", Africa, Sovereign, Hard, "Juba", 6.876992, 31.306978),
    c("es", "Spain", Europe, Sovereign, Easy, "Madrid", 40.463667, -3.74922),
    c("lk", "Sri Lanka", Asia, Sovereign, Normal, "Sri Jayawardenepura Kotte", 7.873054, 80.771797),
    c("sd", "Sudan", Africa, Sovereign, Normal, "Khartoum", 12.862807, 30.217636),
    c("sr", "Suriname", Americas, Sovereign, Hard, "Paramaribo", 3.919305, -56.027783),
    c("se", "Sweden", Europe, Sovereign, Easy, "Stockholm", 60.128161, 18.643501),
    c("ch", "Switzerland", Europe, Sovereign, Normal, "Bern", 46.818188, 8.227512),
    c("sy", "Syria", Asia, Sovereign, Normal, "Damascus", 34.802075, 38.996815),
    c("tj", "Tajikistan", Asia, Sovereign, Hard, "Dushanbe", 38.861034, 71.276093),
    c("tz", "Tanzania", Africa, Sovereign, Normal, "Dodoma", -6.369028, 34.888822),
    c("th", "Thailand", Asia, Sovereign, Easy, "Bangkok", 15.870032, 100.992541),
    c("tl", "Timor-Leste", Asia, Sovereign, Hard, "Dili", -8.874217, 125.727539),
    c("tg", "Togo", Africa, Sovereign, Hard, "Lomé", 8.619543, 0.824782),
    c("to", "Tonga", Oceania, Sovereign, Hard, "Nukuʻalofa", -21.178986, -175.198242),
    c("tt", "Trinidad and Tobago", Americas, Sovereign, Hard, "Port of Spain", 10.691803, -61.222503),
    c("tn", "Tunisia", Africa, Sovereign, Normal, "Tunis", 33.886917, 9.537499),
    c("tr", "Turkey", Asia, Sovereign, Easy, "Ankara", 38.963745, 35.243322),
    c("tm", "Turkmenistan", Asia, Sovereign, Hard, "Ashgabat", 38.969719, 59.556278),
    c("tv", "Tuvalu", Oceania, Sovereign, Hard, "Funafuti", -7.109535, 177.64933),
    c("ug", "Uganda", Africa, Sovereign, Normal, "Kampala", 1.373333, 32.290275),
    c("ua", "Ukraine", Europe, Sovereign, Easy, "Kyiv", 48.379433, 31.16558),
    c("ae", "United Arab Emirates", Asia, Sovereign, Normal, "Abu Dhabi", 23.424076, 53.847818),
    c("gb", "United Kingdom", Europe, Sovereign, Easy, "London", 55.378051, -3.435973),
    c("us", "United States", Americas, Sovereign, Easy, "Washington, D.C.", 37.09024, -95.712891),
    c("uy", "Uruguay", Americas, Sovereign, Normal, "Montevideo", -32.522779, -55.765835),
    c("uz", "Uzbekistan", Asia, Sovereign, Normal, "Tashkent", 41.377491, 64.585262),
    c("vu", "Vanuatu", Oceania, Sovereign, Hard, "Port Vila", -15.376706, 166.959158),
    c("va", "Vatican City", Europe, Sovereign, Hard, "Vatican City", 41.902916, 12.453389),
    c("ve", "Venezuela", Americas, Sovereign, Normal, "Caracas", 6.42375, -66.58973),
    c("vn", "Vietnam", Asia, Sovereign, Normal, "Hanoi", 14.058324, 108.277199),
    c("ye", "Yemen", Asia, Sovereign, Normal, "Sana'a", 15.552727, 48.516388),
    c("zm", "Zambia", Africa, Sovereign, Normal, "Lusaka", -13.133897, 27.849332),
    c("zw", "Zimbabwe", Africa, Sovereign, Normal, "Harare", -19.015438, 29.154857),
    // Territories and partially recognized regions
    c("as", "American Samoa", Oceania, Territory, Hard, "Pago Pago", -14.270972, -170.132217),
    c("aw", "Aruba", Americas, Territory, Hard, "Oranjestad", 12.52111, -69.968338),
    c("bm", "Bermuda", Americas, Territory, Hard, "Hamilton", 32.321384, -64.75737),
    c("ky", "Cayman Islands", Americas, Territory, Hard, "George Town", 19.513469, -80.566956),
    c("ck", "Cook Islands", Oceania, Territory, Hard, "Avarua", -21.236736, -159.777671),
    c("cw", "Curaçao", Americas, Territory, Hard, "Willemstad", 12.16957, -68.990021),
    c("fk", "Falkland Islands", Americas, Territory, Normal, "Stanley", -51.796253, -59.523613),
    c("fo", "Faroe Islands", Europe, Territory, Hard, "Tórshavn", 61.892635, -6.911806),
    c("gf", "French Guiana", Americas, Territory, Normal, "Cayenne", 3.933889, -53.125782),
    c("pf", "French Polynesia", Oceania, Territory, Hard, "Papeete", -17.679742, -149.406843),
    c("gi", "Gibraltar", Europe, Territory, Hard, "Gibraltar", 36.137741, -5.345374),
    c("gl", "Greenland", Americas, Territory, Easy, "Nuuk", 71.706936, -42.604303),
    c("gp", "Guadeloupe", Americas, Territory, Hard, "Basse-Terre", 16.995971, -62.067641),
    c("gu", "Guam", Oceania, Territory, Hard, "Hagåtña", 13.444304, 144.793731),
    c("hk", "Hong Kong", Asia, Territory, Normal, "Hong Kong", 22.396428, 114.109497),
    c("im", "Isle of Man", Europe, Territory, Hard, "Douglas", 54.236107, -4.548056),
    c("xk", "Kosovo", Europe, Territory, Normal, "Pristina", 42.602636, 20.902977),
    c("mo", "Macau", Asia, Territory, Hard, "Macau", 22.198745, 113.543873),
    c("mq", "Martinique", Americas, Territory, Hard, "Fort-de-France", 14.641528, -61.024174),
    c("nc", "New Caledonia", Oceania, Territory, Normal, "Nouméa", -20.904305, 165.618042),
    c("ps", "Palestine", Asia, Territory, Normal, "Ramallah", 31.952162, 35.233154),
    c("pr", "Puerto Rico", Americas, Territory, Normal, "San Juan", 18.220833, -66.590149),
    c("re", "Réunion", Africa, Territory, Hard, "Saint-Denis", -21.115141, 55.536384),
    c("tw", "Taiwan", Asia, Territory, Normal, "Taipei", 23.69781, 120.960515),
    c("eh", "Western Sahara", Africa, Territory, Normal, "Laayoune", 24.215527, -12.885834),
];
