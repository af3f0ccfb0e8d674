//! テスト用ユーティリティ
//!
//! テストコードで使用する便利なマクロや関数を提供します。

macro_rules! hashset {
    ( $($v:expr,)* ) => {
        {
            #[allow(unused_mut)]
            let mut h = hashbrown::HashSet::new();
            $(
                h.insert($v.into());
            )*
            h
        }
    };
    ( $($v:expr),* ) => {
        hashset![$( $v, )*]
    };
}

pub(crate) use hashset;

/// WordNet 3.1 の `index.*` ファイルと同じ形の著作権ヘッダー
pub(crate) const WORDNET_HEADER: &str = "  1 This software and database is being provided to you, the LICENSEE, by  
  2 Princeton University under the following license.  By obtaining, using  
  3 and/or copying this software and database, you agree that you have  
  4 read, understood, and will comply with these terms and conditions.:  
";
