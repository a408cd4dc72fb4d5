//! Resource-percentage table for rain-affected target revision.
//!
//! Rows are whole overs remaining (1..=50), columns are wickets lost
//! (0..=10). A side starting a full 50-over innings with all wickets in hand
//! has 100% of its resources; the last column is always 0, since with ten wickets
//! down there is nothing left to bat with. Values follow the usual
//! exponential depletion shape used by DLS-style calculators; this is a
//! simplified amateur table, not the official professional edition.
pub const RESOURCE_TABLE: [[f64; 11]; 50] = [
    [5.5, 5.5, 5.5, 5.4, 5.4, 5.4, 5.2, 5.0, 4.6, 3.5, 0.0],
    [10.5, 10.5, 10.4, 10.3, 10.2, 10.0, 9.6, 8.9, 7.5, 4.6, 0.0],
    [15.2, 15.1, 15.0, 14.9, 14.6, 14.1, 13.4, 11.9, 9.4, 5.0, 0.0],
    [19.6, 19.5, 19.3, 19.0, 18.6, 17.9, 16.6, 14.4, 10.7, 5.2, 0.0],
    [23.9, 23.7, 23.4, 23.0, 22.3, 21.2, 19.4, 16.3, 11.5, 5.2, 0.0],
    [27.8, 27.6, 27.2, 26.6, 25.7, 24.3, 21.9, 17.9, 12.1, 5.3, 0.0],
    [31.6, 31.3, 30.8, 30.0, 28.9, 27.0, 24.0, 19.2, 12.5, 5.3, 0.0],
    [35.2, 34.8, 34.2, 33.2, 31.8, 29.5, 25.8, 20.2, 12.8, 5.3, 0.0],
    [38.7, 38.1, 37.4, 36.2, 34.5, 31.8, 27.5, 21.0, 12.9, 5.3, 0.0],
    [41.9, 41.3, 40.4, 39.0, 37.0, 33.8, 28.9, 21.7, 13.1, 5.3, 0.0],
    [45.0, 44.3, 43.2, 41.7, 39.3, 35.7, 30.1, 22.3, 13.2, 5.3, 0.0],
    [48.0, 47.2, 45.9, 44.2, 41.5, 37.4, 31.2, 22.7, 13.2, 5.3, 0.0],
    [50.8, 49.9, 48.5, 46.5, 43.5, 38.9, 32.2, 23.1, 13.2, 5.3, 0.0],
    [53.5, 52.4, 50.9, 48.7, 45.3, 40.3, 33.0, 23.4, 13.3, 5.3, 0.0],
    [56.1, 54.9, 53.2, 50.7, 47.0, 41.6, 33.8, 23.6, 13.3, 5.3, 0.0],
    [58.6, 57.2, 55.4, 52.6, 48.6, 42.8, 34.4, 23.8, 13.3, 5.3, 0.0],
    [60.9, 59.4, 57.4, 54.5, 50.1, 43.8, 35.0, 23.9, 13.3, 5.3, 0.0],
    [63.1, 61.6, 59.3, 56.2, 51.5, 44.8, 35.5, 24.1, 13.3, 5.3, 0.0],
    [65.3, 63.6, 61.2, 57.8, 52.8, 45.7, 35.9, 24.2, 13.3, 5.3, 0.0],
    [67.3, 65.5, 62.9, 59.3, 54.0, 46.5, 36.3, 24.3, 13.3, 5.3, 0.0],
    [69.2, 67.3, 64.6, 60.7, 55.1, 47.2, 36.6, 24.3, 13.3, 5.3, 0.0],
    [71.1, 69.0, 66.1, 62.0, 56.1, 47.9, 36.9, 24.4, 13.3, 5.3, 0.0],
    [72.9, 70.7, 67.6, 63.3, 57.1, 48.5, 37.2, 24.4, 13.3, 5.3, 0.0],
    [74.6, 72.3, 69.0, 64.5, 58.0, 49.0, 37.4, 24.5, 13.3, 5.3, 0.0],
    [76.2, 73.8, 70.4, 65.6, 58.8, 49.5, 37.6, 24.5, 13.3, 5.3, 0.0],
    [77.7, 75.2, 71.6, 66.6, 59.6, 50.0, 37.8, 24.5, 13.3, 5.3, 0.0],
    [79.2, 76.5, 72.8, 67.6, 60.3, 50.4, 37.9, 24.5, 13.3, 5.3, 0.0],
    [80.6, 77.8, 74.0, 68.6, 61.0, 50.8, 38.1, 24.6, 13.3, 5.3, 0.0],
    [82.0, 79.1, 75.0, 69.4, 61.6, 51.1, 38.2, 24.6, 13.3, 5.3, 0.0],
    [83.3, 80.2, 76.1, 70.3, 62.2, 51.5, 38.3, 24.6, 13.3, 5.3, 0.0],
    [84.5, 81.4, 77.0, 71.0, 62.8, 51.8, 38.4, 24.6, 13.3, 5.3, 0.0],
    [85.7, 82.4, 77.9, 71.8, 63.3, 52.0, 38.5, 24.6, 13.3, 5.3, 0.0],
    [86.8, 83.5, 78.8, 72.5, 63.7, 52.3, 38.5, 24.6, 13.3, 5.3, 0.0],
    [87.9, 84.4, 79.6, 73.1, 64.2, 52.5, 38.6, 24.6, 13.3, 5.3, 0.0],
    [88.9, 85.3, 80.4, 73.7, 64.6, 52.7, 38.7, 24.6, 13.3, 5.3, 0.0],
    [89.9, 86.2, 81.2, 74.3, 65.0, 52.9, 38.7, 24.6, 13.3, 5.3, 0.0],
    [90.9, 87.1, 81.9, 74.8, 65.3, 53.1, 38.8, 24.6, 13.3, 5.3, 0.0],
    [91.8, 87.9, 82.6, 75.4, 65.6, 53.2, 38.8, 24.6, 13.3, 5.3, 0.0],
    [92.6, 88.6, 83.2, 75.8, 66.0, 53.4, 38.8, 24.6, 13.3, 5.3, 0.0],
    [93.5, 89.4, 83.8, 76.3, 66.2, 53.5, 38.9, 24.6, 13.3, 5.3, 0.0],
    [94.3, 90.1, 84.4, 76.7, 66.5, 53.6, 38.9, 24.6, 13.3, 5.3, 0.0],
    [95.0, 90.7, 84.9, 77.1, 66.8, 53.7, 38.9, 24.6, 13.3, 5.3, 0.0],
    [95.7, 91.4, 85.4, 77.5, 67.0, 53.8, 38.9, 24.6, 13.3, 5.3, 0.0],
    [96.4, 92.0, 85.9, 77.9, 67.2, 53.9, 39.0, 24.6, 13.3, 5.3, 0.0],
    [97.1, 92.5, 86.4, 78.2, 67.4, 54.0, 39.0, 24.6, 13.3, 5.3, 0.0],
    [97.7, 93.1, 86.8, 78.5, 67.6, 54.1, 39.0, 24.6, 13.3, 5.3, 0.0],
    [98.3, 93.6, 87.3, 78.8, 67.8, 54.1, 39.0, 24.6, 13.3, 5.3, 0.0],
    [98.9, 94.1, 87.7, 79.1, 67.9, 54.2, 39.0, 24.6, 13.3, 5.3, 0.0],
    [99.5, 94.6, 88.0, 79.4, 68.1, 54.3, 39.0, 24.6, 13.3, 5.3, 0.0],
    [100.0, 95.0, 88.4, 79.6, 68.2, 54.3, 39.0, 24.6, 13.3, 5.3, 0.0],
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_anchor_cells() {
        assert_eq!(RESOURCE_TABLE[49][0], 100.0); // full 50-over innings
        assert_eq!(RESOURCE_TABLE[19][0], 67.3); // 20 overs, wickets in hand
        assert_eq!(RESOURCE_TABLE[14][0], 56.1); // 15 overs, wickets in hand
    }

    #[test]
    fn test_ten_wickets_column_is_zero() {
        for row in RESOURCE_TABLE.iter() {
            assert_eq!(row[10], 0.0);
        }
    }

    #[test]
    fn test_monotone_in_overs() {
        for w in 0..11 {
            for o in 1..50 {
                assert!(
                    RESOURCE_TABLE[o][w] >= RESOURCE_TABLE[o - 1][w],
                    "resources must not shrink with more overs left ({} overs, {} wkts)",
                    o + 1,
                    w
                );
            }
        }
    }

    #[test]
    fn test_monotone_in_wickets() {
        for row in RESOURCE_TABLE.iter() {
            for w in 1..11 {
                assert!(
                    row[w] <= row[w - 1],
                    "resources must not grow as wickets fall"
                );
            }
        }
    }
}
