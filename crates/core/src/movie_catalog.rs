//! Genre × language catalog backing movie recommendations.
//!
//! The catalog defines which emotion/language pairs are supported, the IMDb
//! search listing for each pair, and the curated titles the fallback
//! synthesizer draws from.

use std::fmt;

/// Default IMDb origin used when building listing URLs.
pub const IMDB_BASE_URL: &str = "https://www.imdb.com";

/// A movie genre, selected by the caller's "emotion".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Genre {
    Drama,
    Action,
    Comedy,
    Horror,
    Crime,
    Fantasy,
    Thriller,
    Romance,
}

impl Genre {
    pub const ALL: [Genre; 8] = [
        Genre::Drama,
        Genre::Action,
        Genre::Comedy,
        Genre::Horror,
        Genre::Crime,
        Genre::Fantasy,
        Genre::Thriller,
        Genre::Romance,
    ];

    /// Case-insensitive lookup by name.
    pub fn parse(name: &str) -> Option<Self> {
        let name = name.trim();
        Self::ALL
            .into_iter()
            .find(|g| g.as_str().eq_ignore_ascii_case(name))
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Genre::Drama => "drama",
            Genre::Action => "action",
            Genre::Comedy => "comedy",
            Genre::Horror => "horror",
            Genre::Crime => "crime",
            Genre::Fantasy => "fantasy",
            Genre::Thriller => "thriller",
            Genre::Romance => "romance",
        }
    }
}

impl fmt::Display for Genre {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A film language supported by the catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Language {
    Telugu,
    English,
    Hindi,
    Tamil,
    Malayalam,
    Kannada,
}

impl Language {
    pub const ALL: [Language; 6] = [
        Language::Telugu,
        Language::English,
        Language::Hindi,
        Language::Tamil,
        Language::Malayalam,
        Language::Kannada,
    ];

    /// Case-insensitive lookup by name.
    pub fn parse(name: &str) -> Option<Self> {
        let name = name.trim();
        Self::ALL
            .into_iter()
            .find(|l| l.as_str().eq_ignore_ascii_case(name))
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Language::Telugu => "telugu",
            Language::English => "english",
            Language::Hindi => "hindi",
            Language::Tamil => "tamil",
            Language::Malayalam => "malayalam",
            Language::Kannada => "kannada",
        }
    }

    /// ISO 639-1 code used by the IMDb `languages` filter.
    pub fn iso_code(self) -> &'static str {
        match self {
            Language::Telugu => "te",
            Language::English => "en",
            Language::Hindi => "hi",
            Language::Tamil => "ta",
            Language::Malayalam => "ml",
            Language::Kannada => "kn",
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// IMDb feature-film search listing for a genre and language.
pub fn listing_url(base_url: &str, genre: Genre, language: Language) -> String {
    format!(
        "{}/search/title/?title_type=feature&genres={}&languages={}",
        base_url.trim_end_matches('/'),
        genre.as_str(),
        language.iso_code()
    )
}

/// Curated titles for a genre and language (always five entries).
pub fn curated_titles(genre: Genre, language: Language) -> &'static [&'static str] {
    use Genre::*;
    use Language::*;
    match (genre, language) {
        (Drama, English) => &["The Pursuit of Happiness", "A Beautiful Mind", "Forrest Gump", "The Shawshank Redemption", "Good Will Hunting"],
        (Drama, Hindi) => &["Taare Zameen Par", "Dangal", "Pink", "Anand", "Mughal-E-Azam"],
        (Drama, Telugu) => &["Baahubali", "Arjun Reddy", "Mahanati", "Jersey", "Sita Ramam"],
        (Drama, Tamil) => &["Kaaka Muttai", "Visaranai", "Asuran", "Pariyerum Perumal", "Vada Chennai"],
        (Drama, Malayalam) => &["Drishyam", "Kumbakonam Gopals", "Maheshinte Prathikaaram", "Angamaly Diaries", "Thondimuthalum Driksakshiyum"],
        (Drama, Kannada) => &["Kirik Party", "Lucia", "Ulidavaru Kandanthe", "Thithi", "Ondu Motteya Kathe"],

        (Action, English) => &["Mad Max: Fury Road", "John Wick", "The Dark Knight", "Avengers: Endgame", "Mission: Impossible"],
        (Action, Hindi) => &["War", "Pathaan", "Baaghi", "Dhoom", "Krrish"],
        (Action, Telugu) => &["RRR", "Pushpa", "Saaho", "Baahubali 2", "Ala Vaikunthapurramuloo"],
        (Action, Tamil) => &["Master", "Vikram", "Beast", "Bigil", "Sarkar"],
        (Action, Malayalam) => &["Lucifer", "Big Brother", "Pulimurugan", "Abrahaminte Santhathikal", "The Great Father"],
        (Action, Kannada) => &["KGF", "Roberrt", "Avane Srimannarayana", "Hebbuli", "The Villain"],

        (Comedy, English) => &["The Hangover", "Superbad", "Anchorman", "Dumb and Dumber", "Borat"],
        (Comedy, Hindi) => &["Hera Pheri", "Andaz Apna Apna", "Munna Bhai MBBS", "Golmaal", "3 Idiots"],
        (Comedy, Telugu) => &["F2: Fun and Frustration", "Venky Mama", "Hello Guru Prema Kosame", "Bhale Bhale Magadivoy", "Pelli Choopulu"],
        (Comedy, Tamil) => &["Soodhu Kavvum", "Naduvula Konjam Pakkatha Kaanom", "Kaththi Sandai", "Comali", "Doctor"],
        (Comedy, Malayalam) => &["In Harihar Nagar", "Ramji Rao Speaking", "Godha", "Kattappanayile Rithwik Roshan", "Maheshinte Prathikaaram"],
        (Comedy, Kannada) => &["Kirik Party", "Chamak", "Googly", "Lifeu Ishtene", "Gultoo"],

        (Horror, English) => &["The Conjuring", "Hereditary", "Get Out", "A Quiet Place", "The Babadook"],
        (Horror, Hindi) => &["Stree", "Tumbbad", "Pari", "Raaz", "Bhoot"],
        (Horror, Telugu) => &["Awe!", "Gruham", "Raju Gari Gadhi", "Prema Katha Chitram", "Geethanjali"],
        (Horror, Tamil) => &["Demonte Colony", "Yaamirukka Bayamey", "Pisaasu", "Maya", "Aval"],
        (Horror, Malayalam) => &["Ezra", "Pretham", "Bhoothakaalam", "Anveshanam", "Chathur Mukham"],
        (Horror, Kannada) => &["Shivalinga", "Aake", "Karvva", "Mummy: Save Me", "Namo Bhootatma"],

        (Crime, English) => &["The Godfather", "Goodfellas", "Pulp Fiction", "Scarface", "The Departed"],
        (Crime, Hindi) => &["Gangs of Wasseypur", "Satya", "Company", "Special 26", "Mumbai Saga"],
        (Crime, Telugu) => &["Kshanam", "Goodachari", "Agent Sai Srinivasa Athreya", "HIT", "V"],
        (Crime, Tamil) => &["Vikram Vedha", "Kaithi", "Theeran Adhigaaram Ondru", "Ratsasan", "Pizza"],
        (Crime, Malayalam) => &["Mumbai Police", "Memories", "CBI Series", "Joseph", "Anjaam Pathiraa"],
        (Crime, Kannada) => &["Tagaru", "Birbal Trilogy", "Kavaludaari", "Kanoora Heggadati", "Aa Karaala Ratri"],

        (Fantasy, English) => &["The Lord of the Rings", "Harry Potter", "Pan's Labyrinth", "The Shape of Water", "Life of Pi"],
        (Fantasy, Hindi) => &["Brahmastra", "Koi... Mil Gaya", "Mr. India", "Paheli", "Krrish"],
        (Fantasy, Telugu) => &["Eega", "Magadheera", "Arundhati", "Yamadonga", "Annamayya"],
        (Fantasy, Tamil) => &["Enthiran", "7aum Arivu", "I", "Kochadaiiyaan", "Maayavan"],
        (Fantasy, Malayalam) => &["Manichithrathazhu", "Bhramaram", "Kummatty", "My Dear Kuttichathan", "Athbhutha Dweepu"],
        (Fantasy, Kannada) => &["Upendra", "A", "Super", "Shiva Mechida Kannappa", "Apthamitra"],

        (Thriller, English) => &["Se7en", "Zodiac", "Gone Girl", "Shutter Island", "The Silence of the Lambs"],
        (Thriller, Hindi) => &["Kahaani", "Talaash", "Drishyam", "Te3n", "Badla"],
        (Thriller, Telugu) => &["Kshanam", "Evaru", "Goodachari", "Agent Sai Srinivasa Athreya", "HIT"],
        (Thriller, Tamil) => &["Ratsasan", "Thani Oruvan", "Yennai Arindhaal", "Dhuruvangal Pathinaaru", "Kuttram 23"],
        (Thriller, Malayalam) => &["Drishyam", "Memories", "Forensic", "Anjaam Pathiraa", "The Great Indian Kitchen"],
        (Thriller, Kannada) => &["Kavaludaari", "U Turn", "Aa Karaala Ratri", "Birbal Trilogy", "Kanoora Heggadati"],

        (Romance, English) => &["The Notebook", "Titanic", "Casablanca", "When Harry Met Sally", "La La Land"],
        (Romance, Hindi) => &["Dilwale Dulhania Le Jayenge", "Kuch Kuch Hota Hai", "Jab We Met", "Zindagi Na Milegi Dobara", "Yeh Jawaani Hai Deewani"],
        (Romance, Telugu) => &["Geetha Govindam", "Arjun Reddy", "Ninnu Kori", "Tholi Prema", "Fidaa"],
        (Romance, Tamil) => &["96", "Vinnaithaandi Varuvaayaa", "Alaipayuthey", "Kaadhal", "OK Kanmani"],
        (Romance, Malayalam) => &["Premam", "Bangalore Days", "Ustad Hotel", "Charlie", "Ennu Ninte Moideen"],
        (Romance, Kannada) => &["Mungaru Male", "Googly", "Milana", "Gaalipata", "Chamak"],
    }
}
