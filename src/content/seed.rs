//! Built-in vocabulary and phrase tables.
//!
//! A starter data set covering seven languages; applications with their own
//! content build a `Catalog` from their provider instead. Japanese entries
//! carry a bracketed romaji reading, which answer validation ignores.

use crate::domain::{ContentType, Item};

const LANGUAGES: [&str; 7] = [
  "english",
  "italian",
  "japanese",
  "czech",
  "portuguese",
  "spanish",
  "german",
];

type Row = (
  &'static str, // category
  [&'static str; 7],
);

fn items_from_rows(content_type: ContentType, rows: &[Row]) -> Vec<Item> {
  rows
    .iter()
    .map(|(category, texts)| {
      let entries: Vec<(&str, &str)> = LANGUAGES.iter().copied().zip(texts.iter().copied()).collect();
      Item::new(content_type, category, &entries)
    })
    .collect()
}

pub fn vocabulary_items() -> Vec<Item> {
  let rows: &[Row] = &[
    // Greetings
    ("Greetings", ["Hello", "Ciao", "こんにちは [konnichiwa]", "Ahoj", "Olá", "Hola", "Hallo"]),
    ("Greetings", ["Good morning", "Buongiorno", "おはよう [ohayou]", "Dobré ráno", "Bom dia", "Buenos días", "Guten Morgen"]),
    ("Greetings", ["Good evening", "Buonasera", "こんばんは [konbanwa]", "Dobrý večer", "Boa noite", "Buenas noches", "Guten Abend"]),
    ("Greetings", ["Goodbye", "Arrivederci", "さようなら [sayounara]", "Na shledanou", "Adeus", "Adiós", "Auf Wiedersehen"]),
    ("Greetings", ["Please", "Per favore", "お願いします [onegaishimasu]", "Prosím", "Por favor", "Por favor", "Bitte"]),
    ("Greetings", ["Thank you", "Grazie", "ありがとう [arigatou]", "Děkuji", "Obrigado", "Gracias", "Danke"]),
    // Numbers
    ("Numbers", ["One", "Uno", "一 [ichi]", "Jedna", "Um", "Uno", "Eins"]),
    ("Numbers", ["Two", "Due", "二 [ni]", "Dvě", "Dois", "Dos", "Zwei"]),
    ("Numbers", ["Three", "Tre", "三 [san]", "Tři", "Três", "Tres", "Drei"]),
    ("Numbers", ["Four", "Quattro", "四 [yon]", "Čtyři", "Quatro", "Cuatro", "Vier"]),
    ("Numbers", ["Five", "Cinque", "五 [go]", "Pět", "Cinco", "Cinco", "Fünf"]),
    // Food
    ("Food", ["Water", "Acqua", "水 [mizu]", "Voda", "Água", "Agua", "Wasser"]),
    ("Food", ["Bread", "Pane", "パン [pan]", "Chléb", "Pão", "Pan", "Brot"]),
    ("Food", ["Wine", "Vino", "ワイン [wain]", "Víno", "Vinho", "Vino", "Wein"]),
    ("Food", ["Coffee", "Caffè", "コーヒー [koohii]", "Káva", "Café", "Café", "Kaffee"]),
    ("Food", ["Cheese", "Formaggio", "チーズ [chiizu]", "Sýr", "Queijo", "Queso", "Käse"]),
    ("Food", ["Fish", "Pesce", "魚 [sakana]", "Ryba", "Peixe", "Pescado", "Fisch"]),
    // Common
    ("Common", ["Yes", "Sì", "はい [hai]", "Ano", "Sim", "Sí", "Ja"]),
    ("Common", ["No", "No", "いいえ [iie]", "Ne", "Não", "No", "Nein"]),
    ("Common", ["House", "Casa", "家 [ie]", "Dům", "Casa", "Casa", "Haus"]),
    ("Common", ["Friend", "Amico", "友達 [tomodachi]", "Přítel", "Amigo", "Amigo", "Freund"]),
    ("Common", ["Beautiful", "Bello", "美しい [utsukushii]", "Krásný", "Bonito", "Hermoso", "Schön"]),
    ("Common", ["Big", "Grande", "大きい [ookii]", "Velký", "Grande", "Grande", "Groß"]),
    ("Common", ["Small", "Piccolo", "小さい [chiisai]", "Malý", "Pequeno", "Pequeño", "Klein"]),
    // Animals
    ("Animals", ["Cat", "Gatto", "猫 [neko]", "Kočka", "Gato", "Gato", "Katze"]),
    ("Animals", ["Dog", "Cane", "犬 [inu]", "Pes", "Cachorro", "Perro", "Hund"]),
    ("Animals", ["Bird", "Uccello", "鳥 [tori]", "Pták", "Pássaro", "Pájaro", "Vogel"]),
    ("Animals", ["Horse", "Cavallo", "馬 [uma]", "Kůň", "Cavalo", "Caballo", "Pferd"]),
  ];
  items_from_rows(ContentType::Vocabulary, rows)
}

pub fn phrase_items() -> Vec<Item> {
  let rows: &[Row] = &[
    // Basic
    ("Basic", ["How are you?", "Come stai?", "お元気ですか [ogenki desu ka]", "Jak se máš?", "Como você está?", "¿Cómo estás?", "Wie geht es dir?"]),
    ("Basic", ["My name is...", "Mi chiamo...", "私の名前は... [watashi no namae wa...]", "Jmenuji se...", "Meu nome é...", "Me llamo...", "Ich heiße..."]),
    ("Basic", ["I don't understand", "Non capisco", "わかりません [wakarimasen]", "Nerozumím", "Não entendo", "No entiendo", "Ich verstehe nicht"]),
    // Weather
    ("Weather", ["What's the weather like?", "Com'è il tempo?", "天気はどうですか [tenki wa dou desu ka]", "Jaké je počasí?", "Como está o tempo?", "¿Cómo está el clima?", "Wie ist das Wetter?"]),
    ("Weather", ["It's raining", "Sta piovendo", "雨が降っています [ame ga futte imasu]", "Prší", "Está chovendo", "Está lloviendo", "Es regnet"]),
    ("Weather", ["I need an umbrella", "Ho bisogno di un ombrello", "傘が必要です [kasa ga hitsuyou desu]", "Potřebuji deštník", "Preciso de um guarda-chuva", "Necesito un paraguas", "Ich brauche einen Regenschirm"]),
    // Restaurant
    ("Restaurant", ["The bill, please", "Il conto, per favore", "お会計をお願いします [okaikei wo onegaishimasu]", "Účet, prosím", "A conta, por favor", "La cuenta, por favor", "Die Rechnung, bitte"]),
    ("Restaurant", ["A table for two", "Un tavolo per due", "二人用のテーブル [futari you no teeburu]", "Stůl pro dva", "Uma mesa para dois", "Una mesa para dos", "Einen Tisch für zwei"]),
  ];
  items_from_rows(ContentType::Phrases, rows)
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_vocabulary_rows_have_categories() {
    for item in vocabulary_items() {
      assert!(!item.category.is_empty());
    }
  }

  #[test]
  fn test_phrase_rows_have_categories() {
    for item in phrase_items() {
      assert!(!item.category.is_empty());
    }
  }

  #[test]
  fn test_no_empty_translations() {
    for item in vocabulary_items().iter().chain(phrase_items().iter()) {
      for (lang, text) in &item.translations {
        assert!(!text.is_empty(), "{} has empty {}", item.id, lang);
      }
    }
  }
}
